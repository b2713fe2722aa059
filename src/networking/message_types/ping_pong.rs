use macros::Serializable;

use crate::serialize::Hash256;

/// Data Object for PING and PONG. The 32-byte message has no meaning yet; a
/// PONG echoes the PING it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serializable)]
pub struct PingPongCommand {
    message: Hash256,
}

impl PingPongCommand {
    pub fn new(message: Hash256) -> Self {
        PingPongCommand { message }
    }

    pub fn message(&self) -> &Hash256 {
        &self.message
    }

    /// The PONG payload answering this PING.
    pub fn echo(&self) -> PingPongCommand {
        PingPongCommand::new(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::Serializable;

    #[test]
    fn test_ping_pong_serialize() {
        let ping = PingPongCommand::new([0xab; 32]);
        let bytes = ping.serialize();
        assert_eq!(bytes, vec![0xab; 32]);
        assert_eq!(PingPongCommand::deserialize(&bytes), Ok(ping));
        assert_eq!(ping.echo().message(), ping.message());
    }
}
