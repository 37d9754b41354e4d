//! Office premises report: one row per property.

use super::Store;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub sequence: usize,
    pub company_name: String,
    pub branch_name: Option<String>,
    pub certificate_no: String,
    pub property_name: String,
    /// Square metres.
    pub building_area: f64,
    pub address: String,
    /// Percentage of the total area, `None` when the total is zero.
    pub area_share: Option<f64>,
}

/// Area and property count of one branch, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchTotal {
    /// `None` groups the properties without a branch.
    pub branch_name: Option<String>,
    pub area: f64,
    pub properties: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_area: f64,
    pub average_area: Option<f64>,
    pub companies: usize,
    pub branches: Vec<BranchTotal>,
}

impl Store {
    #[must_use]
    pub fn property_report(&self) -> Vec<ReportRow> {
        let total = self.report_summary().total_area;

        self.properties
            .iter()
            .enumerate()
            .map(|(i, p)| ReportRow {
                sequence: i + 1,
                company_name: p.company.clone().unwrap_or_default(),
                branch_name: p.branch_name.clone(),
                certificate_no: p.certificate_no.clone().unwrap_or_default(),
                property_name: p.name.clone(),
                building_area: p.area,
                address: p.address.clone(),
                area_share: (total > 0.0).then(|| p.area / total * 100.0),
            })
            .collect()
    }

    #[must_use]
    pub fn report_summary(&self) -> ReportSummary {
        let total_area: f64 = self.properties.iter().map(|p| p.area).sum();
        let companies = self
            .properties
            .iter()
            .filter_map(|p| p.company.as_deref())
            .collect::<BTreeSet<_>>()
            .len();

        let mut branches: Vec<BranchTotal> = Vec::new();
        for p in &self.properties {
            match branches.iter_mut().find(|b| b.branch_name == p.branch_name) {
                Some(branch) => {
                    branch.area += p.area;
                    branch.properties += 1;
                }
                None => branches.push(BranchTotal {
                    branch_name: p.branch_name.clone(),
                    area: p.area,
                    properties: 1,
                }),
            }
        }

        ReportSummary {
            total_area,
            average_area: (!self.properties.is_empty())
                .then(|| total_area / self.properties.len() as f64),
            companies,
            branches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BranchTotal;
    use crate::config::StoreConfig;
    use crate::seed::SeedData;
    use crate::store::Store;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_are_numbered_and_shares_add_up() {
        let store = Store::from_seed(SeedData::builtin(), StoreConfig::default());

        let rows = store.property_report();

        assert_eq!(
            rows.iter().map(|r| r.sequence).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(rows[2].certificate_no, "");
        let share: f64 = rows.iter().filter_map(|r| r.area_share).sum();
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn summary_counts_distinct_companies() {
        let store = Store::from_seed(SeedData::builtin(), StoreConfig::default());

        let summary = store.report_summary();

        assert_eq!(summary.total_area, 19200.0);
        assert_eq!(summary.average_area, Some(6400.0));
        assert_eq!(summary.companies, 1);
    }

    #[test]
    fn branches_group_area_in_order_of_appearance() {
        let mut seed = SeedData::builtin();
        seed.properties[2].branch_name = Some("Headquarters".to_string());
        seed.properties[1].branch_name = None;
        let store = Store::from_seed(seed, StoreConfig::default());

        let branches = store.report_summary().branches;

        assert_eq!(
            branches,
            vec![
                BranchTotal {
                    branch_name: Some("Headquarters".to_string()),
                    area: 13000.0,
                    properties: 2,
                },
                BranchTotal {
                    branch_name: None,
                    area: 6200.0,
                    properties: 1,
                },
            ]
        );
        assert_eq!(store.property_report()[1].branch_name, None);
    }

    #[test]
    fn builtin_properties_each_have_a_branch() {
        let store = Store::from_seed(SeedData::builtin(), StoreConfig::default());

        let names: Vec<Option<String>> = store
            .report_summary()
            .branches
            .into_iter()
            .map(|b| b.branch_name)
            .collect();

        assert_eq!(
            names,
            vec![
                Some("Headquarters".to_string()),
                Some("Shenzhen Branch".to_string()),
                Some("Customer Service Branch".to_string()),
            ]
        );
    }

    #[test]
    fn empty_store_has_no_average() {
        let store = Store::from_seed(SeedData::default(), StoreConfig::default());

        assert_eq!(store.report_summary().average_area, None);
        assert!(store.property_report().is_empty());
    }
}
