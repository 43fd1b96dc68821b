//! Map wire messages to domain messages.
//!
//! `messageEmpty` is a tombstone and maps to `None`. Media, actions and text
//! entities the domain has no shape for map to their `Unsupported` variant
//! carrying the constructor name.

use crate::adapters::telegram::mapper;
use crate::domain::flags::MessageFlags;
use crate::domain::{
    ForwardHeader, Media, Message, MessageAction, MessageKind, TextEntity, TextEntityKind,
};
use crate::tl::{enums, types};
use tracing::{debug, warn};

pub fn message_to_domain(message: &enums::Message) -> Option<Message> {
    match message {
        enums::Message::Empty(m) => {
            debug!(msg_id = m.id, "skipping messageEmpty");
            None
        }
        enums::Message::Message(m) => Some(Message {
            id: m.id,
            kind: MessageKind::Normal,
            from_id: m.from_id,
            to: mapper::peer_to_domain(&m.to_id),
            date: m.date,
            flags: MessageFlags::from_raw(m.flags),
            text: m.message.clone(),
            action: None,
            forward: m.fwd_from.as_ref().map(forward_header_to_domain),
            media: m.media.as_ref().and_then(media_to_domain),
            entities: m
                .entities
                .iter()
                .flatten()
                .map(entity_to_domain)
                .collect(),
            views: m.views,
            reply_to_msg_id: m.reply_to_msg_id,
            edit_date: m.edit_date,
            via_bot_id: m.via_bot_id,
            post_author: m.post_author.clone(),
        }),
        enums::Message::Service(m) => Some(service_message_to_domain(m)),
    }
}

/// Normalize a list, dropping tombstones and keeping order.
pub fn messages_to_domain(messages: &[enums::Message]) -> Vec<Message> {
    messages.iter().filter_map(message_to_domain).collect()
}

fn service_message_to_domain(m: &types::MessageService) -> Message {
    Message {
        id: m.id,
        kind: MessageKind::Service,
        from_id: m.from_id,
        to: mapper::peer_to_domain(&m.to_id),
        date: m.date,
        flags: MessageFlags::from_raw(m.flags),
        text: String::new(),
        action: action_to_domain(&m.action),
        forward: None,
        media: None,
        entities: Vec::new(),
        views: None,
        reply_to_msg_id: m.reply_to_msg_id,
        edit_date: None,
        via_bot_id: None,
        post_author: None,
    }
}

/// `messageActionEmpty` maps to `None`.
pub fn action_to_domain(action: &enums::MessageAction) -> Option<MessageAction> {
    let mapped = match action {
        enums::MessageAction::Empty => return None,
        enums::MessageAction::ChatCreate { title, users } => MessageAction::ChatCreate {
            title: title.clone(),
            user_ids: users.clone(),
        },
        enums::MessageAction::ChatEditTitle { title } => MessageAction::ChatEditTitle {
            title: title.clone(),
        },
        enums::MessageAction::ChatEditPhoto { photo } => MessageAction::ChatEditPhoto {
            photo: mapper::photo_to_domain(photo),
        },
        enums::MessageAction::ChatDeletePhoto => MessageAction::ChatDeletePhoto,
        enums::MessageAction::ChatAddUser { users } => MessageAction::ChatAddUser {
            user_ids: users.clone(),
        },
        enums::MessageAction::ChatDeleteUser { user_id } => MessageAction::ChatDeleteUser {
            user_id: *user_id,
        },
        enums::MessageAction::ChatJoinedByLink { inviter_id } => {
            MessageAction::ChatJoinedByLink {
                inviter_id: *inviter_id,
            }
        }
        enums::MessageAction::ChannelCreate { title } => MessageAction::ChannelCreate {
            title: title.clone(),
        },
        enums::MessageAction::ChatMigrateTo { channel_id } => MessageAction::ChatMigrateTo {
            channel_id: *channel_id,
        },
        enums::MessageAction::ChannelMigrateFrom { title, chat_id } => {
            MessageAction::ChannelMigrateFrom {
                title: title.clone(),
                chat_id: *chat_id,
            }
        }
        enums::MessageAction::PinMessage => MessageAction::PinMessage,
        enums::MessageAction::HistoryClear => MessageAction::HistoryClear,
        enums::MessageAction::GameScore { game_id, score } => MessageAction::GameScore {
            game_id: *game_id,
            score: *score,
        },
        enums::MessageAction::PhoneCall {
            call_id, duration, ..
        } => MessageAction::PhoneCall {
            call_id: *call_id,
            duration: *duration,
        },
        enums::MessageAction::PaymentSent { .. }
        | enums::MessageAction::ScreenshotTaken
        | enums::MessageAction::CustomAction { .. } => {
            warn!(type_name = action.name(), "unsupported message action");
            MessageAction::Unsupported {
                type_name: action.name().to_string(),
            }
        }
    };
    Some(mapped)
}

pub fn entity_to_domain(entity: &enums::MessageEntity) -> TextEntity {
    let (offset, length) = entity.span();
    let kind = match entity {
        enums::MessageEntity::Unknown { .. } => TextEntityKind::Unknown,
        enums::MessageEntity::Mention { .. } => TextEntityKind::Mention,
        enums::MessageEntity::Hashtag { .. } => TextEntityKind::Hashtag,
        enums::MessageEntity::BotCommand { .. } => TextEntityKind::BotCommand,
        enums::MessageEntity::Url { .. } => TextEntityKind::Url,
        enums::MessageEntity::Email { .. } => TextEntityKind::Email,
        enums::MessageEntity::Bold { .. } => TextEntityKind::Bold,
        enums::MessageEntity::Italic { .. } => TextEntityKind::Italic,
        enums::MessageEntity::Code { .. } => TextEntityKind::Code,
        enums::MessageEntity::Pre { language, .. } => TextEntityKind::Pre {
            language: language.clone(),
        },
        enums::MessageEntity::TextUrl { url, .. } => TextEntityKind::TextUrl { url: url.clone() },
        enums::MessageEntity::MentionName { user_id, .. } => {
            TextEntityKind::MentionName { user_id: *user_id }
        }
        enums::MessageEntity::Phone { .. } | enums::MessageEntity::Cashtag { .. } => {
            debug!(type_name = entity.name(), "unsupported message entity");
            TextEntityKind::Unsupported {
                type_name: entity.name().to_string(),
            }
        }
    };
    TextEntity {
        kind,
        offset,
        length,
    }
}

/// `messageMediaEmpty` maps to `None`.
pub fn media_to_domain(media: &enums::MessageMedia) -> Option<Media> {
    match media {
        enums::MessageMedia::Empty => None,
        enums::MessageMedia::Photo { photo, caption } => Some(Media::Photo {
            photo: photo.as_ref().and_then(mapper::photo_to_domain),
            caption: caption.clone(),
        }),
        enums::MessageMedia::Contact {
            phone_number,
            first_name,
            last_name,
            user_id,
        } => Some(Media::Contact {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            user_id: *user_id,
            phone: phone_number.clone(),
        }),
        enums::MessageMedia::Document { document, caption } => Some(Media::Document {
            document: document.as_ref().and_then(mapper::document_to_domain),
            caption: caption.clone(),
        }),
        enums::MessageMedia::Geo { .. }
        | enums::MessageMedia::Unsupported
        | enums::MessageMedia::WebPage { .. }
        | enums::MessageMedia::Venue { .. }
        | enums::MessageMedia::Game { .. } => {
            debug!(type_name = media.name(), "unsupported message media");
            Some(Media::Unsupported {
                type_name: media.name().to_string(),
            })
        }
    }
}

pub fn forward_header_to_domain(header: &types::MessageFwdHeader) -> ForwardHeader {
    ForwardHeader {
        from_id: header.from_id,
        date: header.date,
        channel_id: header.channel_id,
        channel_post: header.channel_post,
        post_author: header.post_author.clone(),
    }
}
