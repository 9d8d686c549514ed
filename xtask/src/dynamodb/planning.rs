//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    /// Name of the HASH key attribute, if the table reports one.
    pub partition_key: Option<String>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with a different partition key; it must be destroyed first.
    KeySchemaMismatch {
        table_name: String,
        expected: String,
        found: Option<String>,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    match current {
        None => DeployPlan::CreateTable {
            config: desired.clone(),
        },
        Some(state) if state.partition_key.as_deref() == Some(&desired.partition_key.name) => {
            DeployPlan::NoChanges {
                table_name: desired.table_name.clone(),
            }
        }
        Some(state) => DeployPlan::KeySchemaMismatch {
            table_name: desired.table_name.clone(),
            expected: desired.partition_key.name.clone(),
            found: state.partition_key.clone(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key.name),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::KeySchemaMismatch {
            table_name,
            expected,
            found,
        } => vec![
            format!("! Table '{}' has an incompatible key schema", table_name),
            format!("  Expected partition key: {} (S)", expected),
            format!(
                "  Found partition key: {}",
                found.as_deref().unwrap_or("<none>")
            ),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::kvgate_table_config;
    use super::*;

    fn active(partition_key: &str) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: Some(partition_key.to_string()),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = kvgate_table_config();
        let plan = calculate_deploy_plan(None, &desired);
        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let desired = kvgate_table_config();
        let plan = calculate_deploy_plan(Some(&active("Key")), &desired);
        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "sample-table".to_string()
            }
        );
    }

    #[test]
    fn test_foreign_key_schema_is_reported() {
        let desired = kvgate_table_config();
        let plan = calculate_deploy_plan(Some(&active("PK")), &desired);
        assert_eq!(
            plan,
            DeployPlan::KeySchemaMismatch {
                table_name: "sample-table".to_string(),
                expected: "Key".to_string(),
                found: Some("PK".to_string()),
            }
        );
    }

    #[test]
    fn test_destroy_plan() {
        assert_eq!(
            calculate_destroy_plan(Some(&active("Key")), "sample-table"),
            DestroyPlan::DeleteTable {
                table_name: "sample-table".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(None, "sample-table"),
            DestroyPlan::AlreadyGone {
                table_name: "sample-table".to_string()
            }
        );
    }

    #[test]
    fn test_format_create_plan() {
        let lines = format_deploy_plan(&DeployPlan::CreateTable {
            config: kvgate_table_config(),
        });
        assert_eq!(lines[0], "+ Create table: sample-table");
        assert_eq!(lines[1], "  Partition key: Key (S)");
    }
}
