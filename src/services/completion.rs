// src/services/completion.rs
use async_trait::async_trait;

use crate::error::CompletionError;

/// Reply used when the service answers without any text.
pub const NO_RESPONSE: &str = "No response";

/// A remote text completion service. Shared read-only across connections.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` and return the normalized reply text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Join text fragments with newlines, falling back to [`NO_RESPONSE`] when there are none.
pub fn join_parts<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let texts: Vec<&str> = parts.into_iter().collect();
    if texts.is_empty() {
        NO_RESPONSE.to_string()
    } else {
        texts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_in_order() {
        assert_eq!(join_parts(["Hi", "there!"]), "Hi\nthere!");
    }

    #[test]
    fn empty_falls_back() {
        assert_eq!(join_parts(Vec::<&str>::new()), NO_RESPONSE);
    }
}
