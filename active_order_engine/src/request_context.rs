use crate::db_types::{ChannelId, Session, UserId};

/// Per-request state handed to the engine by the API layer.
///
/// The context is built once per request and is not modified afterwards. In particular, the `session` it carries is a
/// snapshot: writes made to the session through the backend during a call are not reflected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    session: Option<Session>,
    channel_id: ChannelId,
    active_user_id: Option<UserId>,
}

impl RequestContext {
    pub fn new<C: Into<ChannelId>>(channel_id: C) -> Self {
        Self { session: None, channel_id: channel_id.into(), active_user_id: None }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_active_user<U: Into<UserId>>(mut self, user_id: U) -> Self {
        self.active_user_id = Some(user_id.into());
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    pub fn active_user_id(&self) -> Option<&UserId> {
        self.active_user_id.as_ref()
    }
}
