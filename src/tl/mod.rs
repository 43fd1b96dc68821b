//! Wire layer. Tagged variants as materialized by the RPC substrate.
//!
//! Layout follows the schema namespaces: bare constructors in [`types`],
//! boxed (tagged) types in [`enums`], remote procedures in [`functions`].
//! [`Request`] and [`Response`] are the envelopes exchanged with the substrate.

pub mod enums;
pub mod functions;
pub mod types;

/// An outgoing remote procedure call.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    GetDialogs(functions::messages::GetDialogs),
    GetHistory(functions::messages::GetHistory),
    SendMessage(functions::messages::SendMessage),
    ImportChatInvite(functions::messages::ImportChatInvite),
    GetChats(functions::messages::GetChats),
    GetFullChat(functions::messages::GetFullChat),
    ResolveUsername(functions::contacts::ResolveUsername),
    GetContacts(functions::contacts::GetContacts),
    ImportContacts(functions::contacts::ImportContacts),
    GetState(functions::updates::GetState),
    GetDifference(functions::updates::GetDifference),
    GetChannelDifference(functions::updates::GetChannelDifference),
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetDialogs(_) => "messages.getDialogs",
            Self::GetHistory(_) => "messages.getHistory",
            Self::SendMessage(_) => "messages.sendMessage",
            Self::ImportChatInvite(_) => "messages.importChatInvite",
            Self::GetChats(_) => "messages.getChats",
            Self::GetFullChat(_) => "messages.getFullChat",
            Self::ResolveUsername(_) => "contacts.resolveUsername",
            Self::GetContacts(_) => "contacts.getContacts",
            Self::ImportContacts(_) => "contacts.importContacts",
            Self::GetState(_) => "updates.getState",
            Self::GetDifference(_) => "updates.getDifference",
            Self::GetChannelDifference(_) => "updates.getChannelDifference",
        }
    }
}

macro_rules! impl_into_request {
    ($($function:path => $variant:ident),* $(,)?) => {
        $(
            impl From<$function> for Request {
                fn from(function: $function) -> Self {
                    Request::$variant(function)
                }
            }
        )*
    };
}

impl_into_request! {
    functions::messages::GetDialogs => GetDialogs,
    functions::messages::GetHistory => GetHistory,
    functions::messages::SendMessage => SendMessage,
    functions::messages::ImportChatInvite => ImportChatInvite,
    functions::messages::GetChats => GetChats,
    functions::messages::GetFullChat => GetFullChat,
    functions::contacts::ResolveUsername => ResolveUsername,
    functions::contacts::GetContacts => GetContacts,
    functions::contacts::ImportContacts => ImportContacts,
    functions::updates::GetState => GetState,
    functions::updates::GetDifference => GetDifference,
    functions::updates::GetChannelDifference => GetChannelDifference,
}

/// A decoded response, or the explicit error the server answered with.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    RpcError(types::RpcError),
    Dialogs(enums::messages::Dialogs),
    Messages(enums::messages::Messages),
    Chats(enums::messages::Chats),
    ChatFull(types::messages::ChatFull),
    ResolvedPeer(types::contacts::ResolvedPeer),
    Contacts(enums::contacts::Contacts),
    ImportedContacts(types::contacts::ImportedContacts),
    State(types::updates::State),
    Difference(enums::updates::Difference),
    ChannelDifference(enums::updates::ChannelDifference),
    Updates(enums::Updates),
}

impl Response {
    /// Constructor name of the concrete variant carried by this response.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RpcError(_) => "rpc_error",
            Self::Dialogs(d) => d.name(),
            Self::Messages(m) => m.name(),
            Self::Chats(c) => c.name(),
            Self::ChatFull(_) => "messages.chatFull",
            Self::ResolvedPeer(_) => "contacts.resolvedPeer",
            Self::Contacts(c) => c.name(),
            Self::ImportedContacts(_) => "contacts.importedContacts",
            Self::State(_) => "updates.state",
            Self::Difference(d) => d.name(),
            Self::ChannelDifference(d) => d.name(),
            Self::Updates(u) => u.name(),
        }
    }
}
