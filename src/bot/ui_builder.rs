//! UI Builder module: card formatting, keyboards, and reply rendering.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile};
use tracing::warn;

use crate::flows::BotReply;
use crate::localization::t;
use crate::store::{HotelRecord, ReviewRecord};

const MORE_DETAILS_URL: &str = "https://www.constancehotels.com/en/";
const WELCOME_LOGO_URL: &str = "https://www.constancehospitality.com/images/logo_254.png";

/// A structured visual reply unit: title, optional subtitle or body text, an
/// image, and link buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub image_url: String,
    pub buttons: Vec<CardButton>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardButton {
    pub title: String,
    pub url: String,
}

/// Formats one hotel search result as a card.
pub fn hotel_as_card(hotel: &HotelRecord) -> Card {
    Card {
        title: hotel.name.clone(),
        subtitle: Some(format!(
            "{} stars. {} reviews. From ${} per night.",
            hotel.rating, hotel.number_of_reviews, hotel.price_starting
        )),
        text: None,
        image_url: hotel.image.clone(),
        buttons: vec![CardButton {
            title: t("more-details"),
            url: MORE_DETAILS_URL.to_string(),
        }],
    }
}

/// Formats one hotel review as a card.
pub fn review_as_card(review: &ReviewRecord) -> Card {
    Card {
        title: review.title.clone(),
        subtitle: None,
        text: Some(review.text.clone()),
        image_url: review.image.clone(),
        buttons: Vec::new(),
    }
}

/// Caption shown under a card's image.
pub fn card_caption(card: &Card) -> String {
    let mut caption = card.title.clone();
    if let Some(subtitle) = &card.subtitle {
        caption.push('\n');
        caption.push_str(subtitle);
    }
    if let Some(text) = &card.text {
        caption.push('\n');
        caption.push_str(text);
    }
    caption
}

/// Renders one flow reply to the chat.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: BotReply) -> Result<()> {
    match reply {
        BotReply::Text(text) => {
            bot.send_message(chat_id, text).await?;
        }
        BotReply::Carousel(cards) => {
            // Telegram has no carousel layout; the cards go out as a run of
            // photo messages.
            for card in cards {
                send_card(bot, chat_id, &card).await?;
            }
        }
        BotReply::Choice { prompt, options } => {
            bot.send_message(chat_id, prompt)
                .reply_markup(choice_keyboard(&options))
                .await?;
        }
        BotReply::Confirm { prompt } => {
            bot.send_message(chat_id, prompt)
                .reply_markup(confirm_keyboard())
                .await?;
        }
    }
    Ok(())
}

async fn send_card(bot: &Bot, chat_id: ChatId, card: &Card) -> Result<()> {
    let caption = card_caption(card);
    match reqwest::Url::parse(&card.image_url) {
        Ok(image) => {
            let mut request = bot.send_photo(chat_id, InputFile::url(image)).caption(caption);
            if let Some(keyboard) = card_keyboard(card) {
                request = request.reply_markup(keyboard);
            }
            request.await?;
        }
        Err(e) => {
            warn!(error = %e, image_url = %card.image_url, "bad card image url, sending text only");
            bot.send_message(chat_id, caption).await?;
        }
    }
    Ok(())
}

fn card_keyboard(card: &Card) -> Option<InlineKeyboardMarkup> {
    let buttons: Vec<InlineKeyboardButton> = card
        .buttons
        .iter()
        .filter_map(|button| {
            reqwest::Url::parse(&button.url)
                .ok()
                .map(|url| InlineKeyboardButton::url(button.title.clone(), url))
        })
        .collect();
    if buttons.is_empty() {
        None
    } else {
        Some(InlineKeyboardMarkup::new(vec![buttons]))
    }
}

/// Inline keyboard over a fixed option list, two options per row.
pub fn choice_keyboard(options: &[String]) -> InlineKeyboardMarkup {
    let rows = options
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|option| {
                    InlineKeyboardButton::callback(option.clone(), format!("room:{option}"))
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

/// Yes/no inline keyboard for the confirmation step.
pub fn confirm_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback(t("confirm-yes"), "confirm:yes".to_string()),
        InlineKeyboardButton::callback(t("confirm-no"), "confirm:no".to_string()),
    ]])
}

/// Welcome card sent in response to `/start`.
pub async fn send_welcome(bot: &Bot, chat_id: ChatId) -> Result<()> {
    match reqwest::Url::parse(WELCOME_LOGO_URL) {
        Ok(logo) => {
            bot.send_photo(chat_id, InputFile::url(logo))
                .caption(t("welcome"))
                .await?;
        }
        Err(_) => {
            bot.send_message(chat_id, t("welcome")).await?;
        }
    }
    Ok(())
}
