//! Exchange statistics.

use crate::exchange::Exchange;
use crate::normalize::Normalization;

/// Summary counts for a set of exchanges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangeStats {
    pub conversations: usize,
    pub exchanges: usize,
    pub answered: usize,
    pub unanswered: usize,
    /// Exchanges whose prompt is the fallback text.
    pub sentinel_prompts: usize,
}

impl ExchangeStats {
    /// Counts `exchanges` drawn from `conversations` conversations.
    pub fn from_exchanges(exchanges: &[Exchange<'_>], conversations: usize) -> Self {
        let answered = exchanges.iter().filter(|e| e.is_answered()).count();
        Self {
            conversations,
            exchanges: exchanges.len(),
            answered,
            unanswered: exchanges.len() - answered,
            sentinel_prompts: exchanges.iter().filter(|e| e.has_sentinel_prompt()).count(),
        }
    }

    pub fn from_normalization(result: &Normalization<'_>) -> Self {
        Self::from_exchanges(result.exchanges(), result.conversation_count())
    }

    /// Percentage of exchanges that have a response.
    #[allow(clippy::cast_precision_loss)]
    pub fn answered_ratio(&self) -> f64 {
        if self.exchanges == 0 {
            return 0.0;
        }
        self.answered as f64 / self.exchanges as f64 * 100.0
    }
}
