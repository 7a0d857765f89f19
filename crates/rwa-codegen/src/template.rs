//! Solidity template generator.
//!
//! Renders the `RWAInterestNote` contract with the configured asset name,
//! coupon and supply cap written into the state variable initializers, and
//! reports which of those literals changed between two configurations so the
//! preview can highlight the most recent edit.

use crate::CodegenError;
use serde::{Deserialize, Serialize};

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Issuance parameters for the interest-note contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContractConfig {
    pub asset_name: String,
    /// Annual coupon in basis points (850 = 8.50%).
    pub coupon_bps: u64,
    /// Maximum number of units that can be issued.
    pub max_supply: u64,
    /// Owner passed to the constructor.
    pub admin: String,
    pub governance_model: String,
    /// Free-form guardrails appended to the governance checklist.
    pub governance_notes: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            asset_name: "Harborview Warehouse".into(),
            coupon_bps: 850,
            max_supply: 1_000_000,
            admin: ZERO_ADDRESS.into(),
            governance_model: "Foundation + Board oversight".into(),
            governance_notes: "Transfers restricted to KYC-approved wallets.".into(),
        }
    }
}

/// A labelled value for the configuration summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotItem {
    pub label: &'static str,
    pub value: String,
}

impl ContractConfig {
    /// Check every field the template or the deployment depends on.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.asset_name.trim().is_empty() {
            return Err(CodegenError::invalid("asset-name", "must not be empty"));
        }
        if self.max_supply == 0 {
            return Err(CodegenError::invalid("max-supply", "must be at least 1"));
        }
        if !is_address(&self.admin) {
            return Err(CodegenError::invalid(
                "admin",
                format!("'{}' is not a 0x-prefixed 20-byte hex address", self.admin),
            ));
        }
        Ok(())
    }

    /// Summary values: total supply, coupon rate and governance model.
    pub fn snapshot(&self) -> Vec<SnapshotItem> {
        vec![
            SnapshotItem {
                label: "Total supply",
                value: group_thousands(self.max_supply),
            },
            SnapshotItem {
                label: "Coupon",
                value: format!("{}% APR", self.coupon_percent()),
            },
            SnapshotItem {
                label: "Governance",
                value: self.governance_model.clone(),
            },
        ]
    }

    /// Review items for the issuance; the last entry is the configured notes.
    pub fn governance_checklist(&self) -> Vec<String> {
        let mut items = vec![
            "Investor onboarding: Verify KYC/AML workflow integrates with off-chain provider."
                .to_string(),
            format!(
                "Asset servicing: Confirm coupon calculations align with {}% APR.",
                self.coupon_percent()
            ),
            "Reporting: Publish NAV statements to the monitoring dashboard weekly.".to_string(),
        ];
        if !self.governance_notes.trim().is_empty() {
            items.push(self.governance_notes.clone());
        }
        items
    }

    /// Coupon as a percentage with two decimals (850 bps -> `8.50`).
    fn coupon_percent(&self) -> String {
        format!("{}.{:02}", self.coupon_bps / 100, self.coupon_bps % 100)
    }

    /// The literals this config contributes to the generated source.
    fn literals(&self) -> [String; 3] {
        [
            string_literal(&self.asset_name),
            self.coupon_bps.to_string(),
            self.max_supply.to_string(),
        ]
    }
}

/// Render the contract source for `config`.
pub fn generate(config: &ContractConfig) -> Result<String, CodegenError> {
    config.validate()?;

    let [asset_name, coupon_bps, max_supply] = config.literals();
    let mut out = String::new();

    out.push_str("// SPDX-License-Identifier: MIT\n");
    out.push_str("pragma solidity ^0.8.23;\n\n");
    out.push_str("import {Ownable} from \"openzeppelin-contracts/access/Ownable.sol\";\n\n");
    out.push_str("contract RWAInterestNote is Ownable {\n");
    out.push_str(&format!("    string public assetName = {asset_name};\n"));
    out.push_str(&format!("    uint256 public couponBps = {coupon_bps};\n"));
    out.push_str(&format!("    uint256 public maxSupply = {max_supply};\n"));
    out.push('\n');
    out.push_str(
        "    event Subscription(address indexed investor, uint256 notional, uint256 timestamp);\n\n",
    );
    out.push_str("    constructor(address _owner) Ownable(_owner) {}\n\n");
    out.push_str("    function subscribe() external payable {\n");
    out.push_str("        require(msg.value > 0, \"subscription requires value\");\n");
    out.push_str("        emit Subscription(msg.sender, msg.value, block.timestamp);\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    tracing::debug!(
        asset_name = %config.asset_name,
        coupon_bps = config.coupon_bps,
        max_supply = config.max_supply,
        bytes = out.len(),
        "generated contract source"
    );

    Ok(out)
}

/// Source literals of `next` whose field differs from `previous`.
///
/// The asset name is reported with its quotes so that it only matches the
/// string literal it was written into.
pub fn changed_values(previous: &ContractConfig, next: &ContractConfig) -> Vec<String> {
    previous
        .literals()
        .into_iter()
        .zip(next.literals())
        .filter(|(before, after)| before != after)
        .map(|(_, after)| after)
        .collect()
}

/// Quote and escape `value` as a Solidity string literal.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn is_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rwa_highlight::{highlight, reconstruct, TokenKind};

    fn config() -> ContractConfig {
        ContractConfig::default()
    }

    // =========================================================================
    // Generation
    // =========================================================================

    #[test]
    fn test_default_source() {
        let source = generate(&config()).unwrap();
        assert!(source.starts_with("// SPDX-License-Identifier: MIT\n"));
        assert!(source.contains("contract RWAInterestNote is Ownable {"));
        assert!(source.contains("string public assetName = \"Harborview Warehouse\";"));
        assert!(source.contains("uint256 public couponBps = 850;"));
        assert!(source.contains("uint256 public maxSupply = 1000000;"));
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn test_values_substituted() {
        let cfg = ContractConfig {
            asset_name: "Pier 7 Cold Storage".into(),
            coupon_bps: 1200,
            max_supply: 250_000,
            ..config()
        };
        let source = generate(&cfg).unwrap();
        assert!(source.contains("assetName = \"Pier 7 Cold Storage\";"));
        assert!(source.contains("couponBps = 1200;"));
        assert!(source.contains("maxSupply = 250000;"));
        assert!(!source.contains("Harborview"));
    }

    #[test]
    fn test_asset_name_is_escaped() {
        let cfg = ContractConfig {
            asset_name: "The \"Dock\" \\ Yard".into(),
            ..config()
        };
        let source = generate(&cfg).unwrap();
        assert!(source.contains(r#"assetName = "The \"Dock\" \\ Yard";"#));

        let segments = highlight(&source, &[] as &[&str]);
        let name = segments
            .iter()
            .find(|s| s.text.starts_with("\"The"))
            .unwrap();
        assert_eq!(name.kind, TokenKind::StringLiteral);
        assert_eq!(name.text, r#""The \"Dock\" \\ Yard""#);
    }

    #[test]
    fn test_generated_source_classifies() {
        let source = generate(&config()).unwrap();
        let segments = highlight(&source, &[] as &[&str]);
        assert_eq!(reconstruct(&segments), source);

        let kind_of = |text: &str| segments.iter().find(|s| s.text == text).map(|s| s.kind);
        assert_eq!(kind_of("RWAInterestNote"), Some(TokenKind::ContractName));
        assert_eq!(kind_of("subscribe"), Some(TokenKind::FunctionName));
        assert_eq!(kind_of("pragma"), Some(TokenKind::Keyword));
        assert_eq!(kind_of("1000000"), Some(TokenKind::NumericLiteral));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_empty_asset_name_rejected() {
        let cfg = ContractConfig {
            asset_name: "  ".into(),
            ..config()
        };
        let err = generate(&cfg).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::InvalidConfig {
                field: "asset-name",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_supply_rejected() {
        let cfg = ContractConfig {
            max_supply: 0,
            ..config()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_coupon_allowed() {
        let cfg = ContractConfig {
            coupon_bps: 0,
            ..config()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_bad_admin_rejected() {
        let bad = [
            "",
            "0x123",
            "0000000000000000000000000000000000000000",
            "0xZZ00000000000000000000000000000000000000",
        ];
        for admin in bad {
            let cfg = ContractConfig {
                admin: admin.into(),
                ..config()
            };
            let err = cfg.validate().unwrap_err();
            assert!(err.to_string().starts_with("Invalid admin"), "{admin}");
        }
    }

    #[test]
    fn test_mixed_case_admin_accepted() {
        let cfg = ContractConfig {
            admin: "0xAbCdEf0123456789abcdef0123456789ABCDEF01".into(),
            ..config()
        };
        assert!(cfg.validate().is_ok());
    }

    // =========================================================================
    // Changed values
    // =========================================================================

    #[test]
    fn test_no_changes() {
        assert!(changed_values(&config(), &config()).is_empty());
    }

    #[test]
    fn test_changed_supply_highlights_literal() {
        let next = ContractConfig {
            max_supply: 2_500_000,
            ..config()
        };
        let changed = changed_values(&config(), &next);
        assert_eq!(changed, vec!["2500000".to_string()]);

        let source = generate(&next).unwrap();
        let segments = highlight(&source, &changed);
        let active: Vec<_> = segments.iter().filter(|s| s.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "2500000");
        assert_eq!(active[0].kind, TokenKind::NumericLiteral);
    }

    #[test]
    fn test_changed_name_is_quoted() {
        let next = ContractConfig {
            asset_name: "Is".into(),
            ..config()
        };
        let changed = changed_values(&config(), &next);
        assert_eq!(changed, vec!["\"Is\"".to_string()]);

        // `is` in `is Ownable` must not light up
        let source = generate(&next).unwrap();
        let segments = highlight(&source, &changed);
        let active: Vec<_> = segments
            .iter()
            .filter(|s| s.active)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(active, vec!["\"Is\""]);
    }

    #[test]
    fn test_admin_change_has_no_literal() {
        let next = ContractConfig {
            admin: "0x1111111111111111111111111111111111111111".into(),
            ..config()
        };
        assert!(changed_values(&config(), &next).is_empty());
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    #[test]
    fn test_snapshot_defaults() {
        let values: Vec<_> = config()
            .snapshot()
            .into_iter()
            .map(|item| (item.label, item.value))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Total supply", "1,000,000".to_string()),
                ("Coupon", "8.50% APR".to_string()),
                ("Governance", "Foundation + Board oversight".to_string()),
            ]
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn test_coupon_formatting() {
        let cfg = ContractConfig {
            coupon_bps: 5,
            ..config()
        };
        assert_eq!(cfg.snapshot()[1].value, "0.05% APR");
    }

    #[test]
    fn test_governance_checklist_tracks_coupon() {
        let cfg = ContractConfig {
            coupon_bps: 1275,
            ..config()
        };
        let items = cfg.governance_checklist();
        assert_eq!(items.len(), 4);
        assert_eq!(
            items[1],
            "Asset servicing: Confirm coupon calculations align with 12.75% APR."
        );
        assert_eq!(items[3], "Transfers restricted to KYC-approved wallets.");
    }

    #[test]
    fn test_blank_governance_notes_omitted() {
        let cfg = ContractConfig {
            governance_notes: "  ".into(),
            ..config()
        };
        assert_eq!(cfg.governance_checklist().len(), 3);
    }

    #[test]
    fn test_governance_change_has_no_literal() {
        let next = ContractConfig {
            governance_model: "DAO vote".into(),
            ..config()
        };
        assert!(changed_values(&config(), &next).is_empty());
        assert_eq!(next.snapshot()[2].value, "DAO vote");
    }
}
