use augur_core::types::{AnalysisReport, EntityId};

use crate::Augur;

impl Augur {
    /// Run the full analysis for one entity.
    ///
    /// Reconciles fundamentals (equities only), sweeps sentiment, and
    /// produces the forecast, each stage running to completion before the
    /// next. The report is always structurally complete: a stage that could
    /// not be resolved is marked unavailable with its rationale instead of
    /// aborting the analysis.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self), fields(symbol = %entity.symbol, kind = ?entity.kind))
    )]
    pub async fn analyze(&self, entity: &EntityId) -> AnalysisReport {
        let fundamentals = self.fundamentals(entity).await;
        let sentiment = self.sentiment(entity).await;
        let forecast = self.forecast(entity).await;
        AnalysisReport {
            entity: entity.clone(),
            fundamentals,
            sentiment,
            forecast,
        }
    }
}
