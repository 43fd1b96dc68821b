//! Implements TgGateway over any RpcExchange.
//!
//! Each operation builds one request, performs one exchange and normalizes
//! the response. An `rpc_error` answer becomes `DomainError::Rpc`; any other
//! variant the request never produces becomes `DomainError::UnexpectedResponse`.

use crate::adapters::telegram::{
    difference, join_index, mapper, message_mapper, update_mapper, EntityJoinIndex,
};
use crate::domain::{
    AnyChat, Chat, ChannelUpdateDifference, DomainError, InputContact, UpdateDifference,
    UpdateState,
};
use crate::ports::{
    ContactList, DialogList, DialogsPage, HistoryWindow, ImportedContacts, MessageBatch,
    ResolvedPeer, RpcExchange, TgGateway,
};
use crate::shared::SyncConfig;
use crate::tl::{enums, functions, Request, Response};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Telegram gateway adapter. Stateless apart from its settings; every call
/// is independent.
pub struct MtprotoGateway<E> {
    exchange: E,
    config: SyncConfig,
}

impl<E: RpcExchange> MtprotoGateway<E> {
    pub fn new(exchange: E, config: SyncConfig) -> Self {
        Self { exchange, config }
    }

    pub fn exchange(&self) -> &E {
        &self.exchange
    }

    /// One exchange. Server errors are turned into `DomainError::Rpc`.
    async fn invoke(&self, request: Request) -> Result<Response, DomainError> {
        let name = request.name();
        debug!(request = name, "invoking");
        match self.exchange.exchange(request).await? {
            Response::RpcError(err) => {
                warn!(
                    request = name,
                    code = err.error_code,
                    message = %err.error_message,
                    "rpc error"
                );
                Err(DomainError::Rpc {
                    request: name,
                    code: err.error_code,
                    message: err.error_message,
                })
            }
            response => Ok(response),
        }
    }

    /// One exchange, then `accept` picks the expected variant. A variant it
    /// hands back is reported as unexpected for this request.
    async fn call<T, F>(&self, request: impl Into<Request>, accept: F) -> Result<T, DomainError>
    where
        F: FnOnce(Response) -> Result<T, Response> + Send,
    {
        let request = request.into();
        let name = request.name();
        let response = self.invoke(request).await?;
        accept(response).map_err(|other| unexpected(name, &other))
    }
}

fn unexpected(request: &'static str, response: &Response) -> DomainError {
    warn!(request, actual = response.name(), "unexpected response");
    DomainError::UnexpectedResponse {
        request,
        actual: response.name(),
    }
}

#[async_trait]
impl<E: RpcExchange> TgGateway for MtprotoGateway<E> {
    async fn resolve_username(&self, username: &str) -> Result<ResolvedPeer, DomainError> {
        let request = functions::contacts::ResolveUsername {
            username: username.to_string(),
        };
        self.call(request, |response| match response {
            Response::ResolvedPeer(resolved) => Ok(ResolvedPeer {
                peer: mapper::peer_to_domain(&resolved.peer),
                entities: join_index::entity_bundle(&resolved.chats, &resolved.users),
            }),
            other => Err(other),
        })
        .await
    }

    async fn get_contacts(&self, hash: i32) -> Result<ContactList, DomainError> {
        self.call(functions::contacts::GetContacts { hash }, |response| {
            match response {
                Response::Contacts(enums::contacts::Contacts::NotModified) => Ok(ContactList {
                    not_modified: true,
                    ..Default::default()
                }),
                Response::Contacts(enums::contacts::Contacts::Contacts(list)) => Ok(ContactList {
                    contacts: list.contacts.iter().map(mapper::contact_to_domain).collect(),
                    users: join_index::normalize_users(&list.users),
                    not_modified: false,
                }),
                other => Err(other),
            }
        })
        .await
    }

    async fn import_contacts(
        &self,
        contacts: &[InputContact],
    ) -> Result<ImportedContacts, DomainError> {
        let request = functions::contacts::ImportContacts {
            contacts: contacts.iter().map(InputContact::to_input_contact).collect(),
        };
        let result = self
            .call(request, |response| match response {
                Response::ImportedContacts(result) => Ok(result),
                other => Err(other),
            })
            .await?;
        if !result.retry_contacts.is_empty() {
            debug!(
                retry = result.retry_contacts.len(),
                "server asked to retry some contacts"
            );
        }
        Ok(ImportedContacts {
            imported: result
                .imported
                .iter()
                .map(mapper::imported_contact_to_domain)
                .collect(),
            retry_client_ids: result.retry_contacts,
            users: join_index::normalize_users(&result.users),
        })
    }

    async fn get_dialogs(&self, page: DialogsPage) -> Result<DialogList, DomainError> {
        let request = functions::messages::GetDialogs {
            offset_date: page.offset_date,
            offset_id: page.offset_id,
            offset_peer: page.offset_peer,
            limit: page.limit,
        };
        let (dialogs, count, chats, users, messages) = self
            .call(request, |response| match response {
                Response::Dialogs(enums::messages::Dialogs::Dialogs(d)) => {
                    Ok((d.dialogs, None, d.chats, d.users, d.messages))
                }
                Response::Dialogs(enums::messages::Dialogs::Slice(d)) => {
                    Ok((d.dialogs, Some(d.count), d.chats, d.users, d.messages))
                }
                other => Err(other),
            })
            .await?;

        let index = EntityJoinIndex::build(&chats, &users, &messages);
        let dialogs: Vec<_> = dialogs
            .iter()
            .map(|enums::Dialog::Dialog(d)| index.resolve_dialog(d))
            .collect();
        let total = count.unwrap_or(dialogs.len() as i32);
        debug!(dialogs = dialogs.len(), total, "dialogs received");
        Ok(DialogList {
            dialogs,
            total,
            entities: index.into_bundle(),
        })
    }

    async fn send_message(
        &self,
        peer: enums::InputPeer,
        text: &str,
        reply_to_msg_id: Option<i32>,
    ) -> Result<Response, DomainError> {
        let request = functions::messages::SendMessage {
            no_webpage: false,
            silent: false,
            background: false,
            clear_draft: false,
            peer,
            reply_to_msg_id,
            message: text.to_string(),
            random_id: rand::random::<i64>(),
            entities: None,
        };
        let response = self.exchange.exchange(request.into()).await?;
        debug!(response = response.name(), "message sent");
        Ok(response)
    }

    async fn import_chat_invite(&self, hash: &str) -> Result<Option<AnyChat>, DomainError> {
        let request = functions::messages::ImportChatInvite {
            hash: hash.to_string(),
        };
        let response = self.exchange.exchange(request.into()).await?;
        match response {
            Response::Updates(enums::Updates::Updates(updates)) => {
                let chat = updates.chats.first().map(mapper::any_chat_to_domain);
                if chat.is_none() {
                    warn!("chat invite accepted without a chat in the response");
                }
                Ok(chat)
            }
            Response::RpcError(err) => {
                warn!(
                    code = err.error_code,
                    message = %err.error_message,
                    "chat invite rejected"
                );
                Ok(None)
            }
            other => {
                warn!(actual = other.name(), "unexpected chat invite response");
                Ok(None)
            }
        }
    }

    async fn get_history(
        &self,
        peer: enums::InputPeer,
        window: HistoryWindow,
    ) -> Result<MessageBatch, DomainError> {
        let request = functions::messages::GetHistory {
            peer,
            offset_id: window.offset_id,
            offset_date: window.offset_date,
            add_offset: window.add_offset,
            limit: window.limit,
            max_id: window.max_id,
            min_id: window.min_id,
        };
        let (messages, count, chats, users) = self
            .call(request, |response| match response {
                Response::Messages(enums::messages::Messages::Messages(m)) => {
                    Ok((m.messages, None, m.chats, m.users))
                }
                Response::Messages(enums::messages::Messages::Slice(m)) => {
                    Ok((m.messages, Some(m.count), m.chats, m.users))
                }
                Response::Messages(enums::messages::Messages::ChannelMessages(m)) => {
                    Ok((m.messages, Some(m.count), m.chats, m.users))
                }
                other => Err(other),
            })
            .await?;
        let messages = message_mapper::messages_to_domain(&messages);
        Ok(MessageBatch {
            count: count.unwrap_or(messages.len() as i32),
            messages,
            entities: join_index::entity_bundle(&chats, &users),
        })
    }

    async fn get_chats(&self, ids: &[i32]) -> Result<Vec<AnyChat>, DomainError> {
        let request = functions::messages::GetChats { id: ids.to_vec() };
        self.call(request, |response| match response {
            Response::Chats(enums::messages::Chats::Chats(c)) => {
                Ok(c.chats.iter().map(mapper::any_chat_to_domain).collect())
            }
            Response::Chats(enums::messages::Chats::Slice(c)) => {
                Ok(c.chats.iter().map(mapper::any_chat_to_domain).collect())
            }
            other => Err(other),
        })
        .await
    }

    async fn get_full_chat(&self, chat_id: i32) -> Result<Chat, DomainError> {
        let request: Request = functions::messages::GetFullChat { chat_id }.into();
        let name = request.name();
        let full = self
            .call(request, |response| match response {
                Response::ChatFull(full) => Ok(full),
                other => Err(other),
            })
            .await?;
        let info = match &full.full_chat {
            enums::ChatFull::Full(info) => info,
            enums::ChatFull::ChannelFull(_) => {
                warn!(request = name, chat_id, "channel full info for a basic chat");
                return Err(DomainError::UnexpectedResponse {
                    request: name,
                    actual: "channelFull",
                });
            }
        };

        let listed = full
            .chats
            .iter()
            .filter(|c| !c.is_channel() && c.id() == info.id)
            .find_map(|c| match mapper::any_chat_to_domain(c) {
                AnyChat::Chat(chat) => Some(chat),
                AnyChat::Channel(_) => None,
            });
        Ok(match listed {
            Some(mut chat) => {
                mapper::enrich_chat(&mut chat, info);
                chat
            }
            None => mapper::chat_full_to_domain(info),
        })
    }

    async fn get_state(&self) -> Result<UpdateState, DomainError> {
        self.call(functions::updates::GetState, |response| match response {
            Response::State(state) => Ok(update_mapper::update_state_to_domain(&state)),
            other => Err(other),
        })
        .await
    }

    async fn get_difference(&self, state: &UpdateState) -> Result<UpdateDifference, DomainError> {
        let request = functions::updates::GetDifference {
            pts: state.pts,
            pts_total_limit: Some(self.config.pts_total_limit_or_default()),
            date: state.date,
            qts: state.qts,
        };
        self.call(request, |response| match response {
            Response::Difference(d) => Ok(difference::difference_to_domain(&d)),
            other => Err(other),
        })
        .await
    }

    async fn get_channel_difference(
        &self,
        channel: enums::InputChannel,
        pts: i32,
        limit: i32,
    ) -> Result<ChannelUpdateDifference, DomainError> {
        let request = functions::updates::GetChannelDifference {
            force: false,
            channel,
            filter: enums::ChannelMessagesFilter::Empty,
            pts,
            limit,
        };
        self.call(request, |response| match response {
            Response::ChannelDifference(d) => Ok(difference::channel_difference_to_domain(&d)),
            other => Err(other),
        })
        .await
    }
}

/// Wire channel reference. An unknown access hash is sent as 0.
pub fn input_channel(channel_id: i32, access_hash: Option<i64>) -> enums::InputChannel {
    enums::InputChannel::Channel {
        channel_id,
        access_hash: access_hash.unwrap_or_default(),
    }
}
