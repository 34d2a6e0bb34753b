use augur_core::rates;
use augur_core::types::{EntityId, EstimateContext, Sourced};
use augur_core::{AugurError, MacroSeries};

use crate::Augur;

impl Augur {
    /// Latest annual inflation rate for a region, in percent.
    ///
    /// Computed as the year-over-year change of the region's monthly CPI
    /// index, tried across the macro providers in priority order. When every
    /// provider fails the oracle supplies a best-effort estimate tagged
    /// `Provenance::Estimated`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a region missing from the catalog, and the
    /// oracle's error when both the chain and the estimate fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self))
    )]
    pub async fn inflation(&self, region: &str) -> Result<Sourced<f64>, AugurError> {
        let entry = catalog_entry(&self.cfg.macro_catalog.inflation, region, "inflation")?;
        let lookup = self
            .chain_lookup("observations", &self.macros, |p| {
                let series_id = entry.series_id.clone();
                Some(async move {
                    let observations = p.fetch_observations(&series_id).await?;
                    rates::year_over_year(&observations)
                })
            })
            .await;

        match lookup {
            Ok(sourced) => Ok(sourced),
            Err(_) => self
                .estimate_rate("current annual inflation rate in percent", entry)
                .await,
        }
    }

    /// Latest policy rate for a region, in percent.
    ///
    /// Takes the most recent observation of the region's policy-rate series,
    /// with the same fallback-then-estimate behavior as [`inflation`](Self::inflation).
    ///
    /// # Errors
    /// Returns `InvalidArg` for a region missing from the catalog, and the
    /// oracle's error when both the chain and the estimate fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self))
    )]
    pub async fn policy_rate(&self, region: &str) -> Result<Sourced<f64>, AugurError> {
        let entry = catalog_entry(&self.cfg.macro_catalog.policy_rate, region, "policy rate")?;
        let lookup = self
            .chain_lookup("observations", &self.macros, |p| {
                let series_id = entry.series_id.clone();
                Some(async move {
                    let observations = p.fetch_observations(&series_id).await?;
                    rates::latest(&observations)
                })
            })
            .await;

        match lookup {
            Ok(sourced) => Ok(sourced),
            Err(_) => {
                self.estimate_rate("current central bank policy rate in percent", entry)
                    .await
            }
        }
    }

    /// Current credit rating for an entity, as an agency-scale string.
    ///
    /// Tried across the fundamentals providers in priority order; providers
    /// without rating coverage fail with `Unsupported` and fall through.
    /// When every provider fails the oracle supplies an estimate tagged
    /// `Provenance::Estimated`.
    ///
    /// # Errors
    /// Returns the oracle's error when both the chain and the estimate fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self), fields(symbol = %entity.symbol))
    )]
    pub async fn credit_rating(&self, entity: &EntityId) -> Result<Sourced<String>, AugurError> {
        let lookup = self
            .chain_lookup("credit_rating", &self.fundamentals, |p| {
                let entity = entity.clone();
                Some(async move {
                    let rating = p.fetch_credit_rating(&entity).await?;
                    if rating.trim().is_empty() {
                        return Err(AugurError::data_unavailable(format!(
                            "blank credit rating for {entity}"
                        )));
                    }
                    Ok(rating)
                })
            })
            .await;

        match lookup {
            Ok(sourced) => Ok(sourced),
            Err(_) => {
                let ctx = EstimateContext {
                    quantity: "current credit rating on the agency scale".to_string(),
                    subject: entity.display_name().to_string(),
                };
                let text = Self::call_with_timeout(
                    "oracle",
                    "estimate",
                    self.cfg.provider_timeout,
                    self.oracle.estimate(&ctx),
                )
                .await?;
                Ok(Sourced::estimated(text.trim().to_string()))
            }
        }
    }

    /// Ask the oracle for a numeric rate estimate and parse it.
    async fn estimate_rate(
        &self,
        quantity: &str,
        entry: &MacroSeries,
    ) -> Result<Sourced<f64>, AugurError> {
        let ctx = EstimateContext {
            quantity: quantity.to_string(),
            subject: entry.display_name.clone(),
        };
        let text = Self::call_with_timeout(
            "oracle",
            "estimate",
            self.cfg.provider_timeout,
            self.oracle.estimate(&ctx),
        )
        .await?;
        let value: f64 = text
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse()
            .map_err(|_| AugurError::oracle(format!("malformed rate estimate: {text:?}")))?;
        Ok(Sourced::estimated(value))
    }
}

fn catalog_entry<'a>(
    catalog: &'a std::collections::BTreeMap<String, MacroSeries>,
    region: &str,
    what: &str,
) -> Result<&'a MacroSeries, AugurError> {
    let slug = region.to_ascii_lowercase();
    catalog
        .get(&slug)
        .ok_or_else(|| AugurError::InvalidArg(format!("unsupported {what} region: {region}")))
}
