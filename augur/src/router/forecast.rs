use augur_core::timeseries::enrich;
use augur_core::types::{EntityId, ForecastOutcome, Series, Sourced};
use augur_core::{AugurError, EntityKind, Period, forecast_closes};

use crate::Augur;

impl Augur {
    /// Produce a short-horizon forecast for the entity.
    ///
    /// Fetches history through the market-data fallback chain, derives the
    /// closing-price column (indicator-filtered for equities), and runs the
    /// windowed forecaster. Every failure along the way is converted into
    /// `ForecastOutcome::Unavailable` with the reason attached; this method
    /// never errors.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self), fields(symbol = %entity.symbol))
    )]
    pub async fn forecast(&self, entity: &EntityId) -> ForecastOutcome {
        match self.fetch_series(entity).await {
            Ok(sourced) => self.forecast_from_series(entity, &sourced.value),
            Err(e) => ForecastOutcome::unavailable(e.to_string()),
        }
    }

    /// Forecast from an already-fetched series, without touching providers.
    pub fn forecast_from_series(&self, entity: &EntityId, series: &Series) -> ForecastOutcome {
        let closes: Vec<f64> = match entity.kind {
            // Equities forecast on the indicator-enriched column: rows
            // without a full indicator window are excluded up front.
            EntityKind::Equity => enrich(series).iter().map(|r| r.point.close).collect(),
            _ => series.closes(),
        };
        forecast_closes(&closes, &self.cfg.forecast)
    }

    /// Fetch a price series via the ordered market-data providers.
    ///
    /// Providers that do not claim the entity's kind are skipped; an empty
    /// series counts as a failure so the chain can keep looking.
    pub(crate) async fn fetch_series(
        &self,
        entity: &EntityId,
    ) -> Result<Sourced<Series>, AugurError> {
        let period = default_period(entity.kind);
        self.chain_lookup("series", &self.market, |p| {
            if !p.supports_kind(entity.kind) {
                return None;
            }
            let entity = entity.clone();
            Some(async move {
                let series = p.fetch_series(&entity, period).await?;
                if series.is_empty() {
                    return Err(AugurError::data_unavailable(format!(
                        "empty series for {entity}"
                    )));
                }
                Ok(series)
            })
        })
        .await
    }
}

/// History range requested per entity kind.
const fn default_period(kind: EntityKind) -> Period {
    match kind {
        EntityKind::Etf => Period::Y3,
        EntityKind::Crypto => Period::Days(365),
        _ => Period::Y5,
    }
}
