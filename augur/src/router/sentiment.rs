use std::collections::BTreeMap;

use augur_core::Sentiment;
use augur_core::types::{EntityId, SentimentContext, SentimentReport};

use crate::Augur;

impl Augur {
    /// Run the multi-source sentiment sweep and validate it into one label.
    ///
    /// Sources are queried concurrently; the ones that respond feed the
    /// oracle's validation call. With no sources, no responses, or a failed
    /// validation, the label degrades to `Neutral` rather than erroring.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self), fields(symbol = %entity.symbol))
    )]
    pub async fn sentiment(&self, entity: &EntityId) -> SentimentReport {
        if self.sentiment.is_empty() {
            return SentimentReport::neutral();
        }

        let timeout = self.cfg.provider_timeout;
        let tasks = self.sentiment.iter().map(|s| {
            let s = s.clone();
            let entity = entity.clone();
            async move {
                let name = s.name();
                let fut = s.sentiment(&entity);
                (
                    name,
                    Self::call_with_timeout(name, "sentiment", timeout, fut).await,
                )
            }
        });

        let mut by_source = BTreeMap::new();
        for (name, res) in futures::future::join_all(tasks).await {
            if let Ok(label) = res {
                by_source.insert(name.to_string(), label);
            }
        }
        if by_source.is_empty() {
            return SentimentReport::neutral();
        }

        let ctx = SentimentContext {
            entity: entity.clone(),
            by_source: by_source.clone(),
        };
        let label = Self::call_with_timeout(
            "oracle",
            "classify_sentiment",
            timeout,
            self.oracle.classify_sentiment(&ctx),
        )
        .await
        .unwrap_or(Sentiment::Neutral);

        SentimentReport { label, by_source }
    }
}
