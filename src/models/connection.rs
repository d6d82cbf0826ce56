// Backend reachability as shown in the header

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Online,
    Offline,
}

impl ConnectionState {
    pub fn from_online(online: bool) -> Self {
        if online {
            ConnectionState::Online
        } else {
            ConnectionState::Offline
        }
    }

    pub fn is_online(self) -> bool {
        self == ConnectionState::Online
    }

    /// Text shown next to the indicator.
    pub fn label(self) -> &'static str {
        match self {
            ConnectionState::Online => "Online",
            ConnectionState::Offline => "Offline",
        }
    }

    /// CSS-style class of the indicator dot.
    pub fn indicator_class(self) -> &'static str {
        match self {
            ConnectionState::Online => "status-dot online",
            ConnectionState::Offline => "status-dot offline",
        }
    }
}
