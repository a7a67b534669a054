//! Per-asset infringement and replication risk

use super::{assets, IpAsset, ProtectionKind};
use crate::domain::constants::ip;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub key: &'static str,
    pub infringement_risk: f64,
    pub competitive_threat: f64,
    pub replication_risk: f64,
    pub protection_effectiveness: f64,
    /// Never negative
    pub overall_risk: f64,
}

fn protection_effectiveness(protection: ProtectionKind) -> f64 {
    match protection {
        ProtectionKind::Patent => ip::PATENT_EFFECTIVENESS,
        ProtectionKind::PatentOrDefensivePublication => ip::DEFENSIVE_PUBLICATION_EFFECTIVENESS,
        ProtectionKind::TradeSecret => ip::TRADE_SECRET_EFFECTIVENESS,
    }
}

/// Score the exposure of a single asset
///
/// High defensibility lowers infringement risk, high market impact raises
/// the competitive threat and high complexity makes replication harder.
/// Stronger protection offsets half its effectiveness from the mean.
pub fn assess_risk(asset: &IpAsset) -> RiskAssessment {
    let max = f64::from(ip::MAX_SCORE);
    let infringement_risk = max - f64::from(asset.scores.defensibility);
    let competitive_threat = f64::from(asset.scores.market_impact);
    let replication_risk = max - f64::from(asset.scores.technical_complexity);
    let protection_effectiveness = protection_effectiveness(asset.protection);

    let mean = (infringement_risk + competitive_threat + replication_risk) / 3.0;

    RiskAssessment {
        key: asset.key,
        infringement_risk,
        competitive_threat,
        replication_risk,
        protection_effectiveness,
        overall_risk: (mean - protection_effectiveness / 2.0).max(0.0),
    }
}

/// Risk for every asset in table order
pub fn assess_portfolio_risk() -> Vec<RiskAssessment> {
    assets().iter().map(assess_risk).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ip_portfolio::lookup;
    use rstest::rstest;

    #[rstest]
    #[case("A", 0.0)]
    #[case("B", 0.0)]
    #[case("C", 1.0 / 3.0)]
    #[case("E", 2.0 / 3.0)]
    #[case("G", 4.0 / 3.0)]
    #[case("H", 1.0 / 6.0)]
    #[case("I", 0.0)]
    fn test_overall_risk(#[case] key: &str, #[case] expected: f64) {
        let risk = assess_risk(lookup(key).unwrap());
        assert!(
            (risk.overall_risk - expected).abs() < 1e-9,
            "{key}: {} != {expected}",
            risk.overall_risk
        );
    }

    #[test]
    fn test_risk_components() {
        let risk = assess_risk(lookup("G").unwrap());
        assert_eq!(risk.infringement_risk, 4.0);
        assert_eq!(risk.competitive_threat, 7.0);
        assert_eq!(risk.replication_risk, 2.0);
        assert_eq!(risk.protection_effectiveness, 6.0);
    }

    #[test]
    fn test_portfolio_risk_is_never_negative() {
        let risks = assess_portfolio_risk();
        assert_eq!(risks.len(), assets().len());
        assert!(risks.iter().all(|r| r.overall_risk >= 0.0));
    }
}
