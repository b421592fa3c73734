// Per-component entry points for the remote-command layer.
//
//   cluster_agent::facade::hbase::validate_config_param("HBASE_ROOT_DIR", "hdfs://nn:8020/hbase")
//   cluster_agent::facade::storm::modify_config("nimbus.seeds", "n1,n2", "storm.yaml")
//
// Each module is a thin binding of the generic functions in
// `libs::dispatcher` to one `Component`.

macro_rules! component_facade {
    ($($module:ident => $component:ident),+ $(,)?) => {
        $(
            pub mod $module {
                use crate::libs::dispatcher;
                use crate::libs::resolver::NotFound;
                use crate::schemas::component::Component;
                use crate::schemas::entry::ResolvedParameter;
                use crate::schemas::status::{ConfigStatus, DispatchStatus, ValidationOutcome};

                pub const COMPONENT: Component = Component::$component;

                pub fn validate_config_param(param_name: &str, value: &str) -> ValidationOutcome {
                    dispatcher::validate_config_param(COMPONENT, param_name, value)
                }

                pub fn resolve_config_param(param_name: &str, value: &str) -> Result<ResolvedParameter, NotFound> {
                    dispatcher::resolve_config_param(COMPONENT, param_name, value)
                }

                pub fn modify_config(param: &str, value: &str, target_file: &str) -> ConfigStatus {
                    dispatcher::modify_config(COMPONENT, param, value, target_file)
                }

                pub fn apply_config_param(param_name: &str, value: &str, target_file: Option<&str>) -> DispatchStatus {
                    dispatcher::apply_config_param(COMPONENT, param_name, value, target_file)
                }
            }
        )+
    };
}

component_facade! {
    hadoop => Hadoop,
    hbase => Hbase,
    hive => Hive,
    kafka => Kafka,
    spark => Spark,
    storm => Storm,
    zookeeper => Zookeeper,
    flink => Flink,
}

#[cfg(test)]
mod tests {
    use crate::schemas::status::{ConfigStatus, ValidationOutcome};

    #[test]
    fn modules_are_bound_to_their_component() {
        assert_eq!(super::hbase::COMPONENT.as_str(), "hbase");
        assert_eq!(super::zookeeper::COMPONENT.as_str(), "zookeeper");
    }

    #[test]
    fn hbase_client_port_range() {
        assert_eq!(
            super::hbase::validate_config_param("hbase.zookeeper.property.clientPort", "2181"),
            ValidationOutcome::ValidationOk
        );
        assert_eq!(
            super::hbase::validate_config_param("hbase.zookeeper.property.clientPort", "70000"),
            ValidationOutcome::ConstraintViolated
        );
    }

    #[test]
    fn storm_rejects_foreign_file_names() {
        assert_eq!(super::storm::modify_config("ui.port", "8080", "storm.yml"), ConfigStatus::SaveFailed);
    }
}
