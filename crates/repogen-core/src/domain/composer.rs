//! Template composition.
//!
//! Pure functions from (template set, namespace, identifiers) to generated
//! artifacts. No I/O here; the orchestrator routes the results through the
//! emitter.
//!
//! Artifact paths are relative to `<ns>.Infrastructure/`.

use std::path::PathBuf;

use crate::domain::{
    identifiers::{ContextName, EntityName},
    plan::{GeneratedArtifact, GenerationPlan},
    templates::TemplateSet,
};

/// The interface/implementation pair for one entity.
///
/// The two artifacts belong together: emitting only one of them would leave
/// the target project non-compiling, so the orchestrator treats the pair as
/// a unit.
pub fn compose_entity_pair(
    templates: &dyn TemplateSet,
    namespace: &str,
    entity: &EntityName,
    context: &ContextName,
) -> [GeneratedArtifact; 2] {
    let ext = templates.source_extension();

    let interface = GeneratedArtifact::new(
        PathBuf::from("Abstractions").join(format!("{}.{ext}", entity.repository_interface())),
        templates.repository_interface(namespace, entity),
    );
    let implementation = GeneratedArtifact::new(
        PathBuf::from("Repositories").join(format!("{}.{ext}", entity.repository_property())),
        templates.repository_implementation(namespace, entity, context),
    );

    [interface, implementation]
}

/// The unit-of-work pair aggregating all entity repositories.
///
/// Property blocks appear in entity order; everything else is fixed
/// header/footer text, so adding an entity only appends a line and reruns
/// produce stable diffs.
pub fn compose_unit_of_work(
    templates: &dyn TemplateSet,
    namespace: &str,
    entities: &[EntityName],
    context: &ContextName,
) -> [GeneratedArtifact; 2] {
    let ext = templates.source_extension();

    let mut interface = templates.unit_of_work_interface_header(namespace);
    for entity in entities {
        interface.push_str(&templates.unit_of_work_interface_property(entity));
    }
    interface.push_str(&templates.unit_of_work_interface_footer());

    let mut implementation = templates.unit_of_work_implementation_header(namespace, context);
    for entity in entities {
        implementation.push_str(&templates.unit_of_work_implementation_property(entity));
    }
    implementation.push_str(&templates.unit_of_work_implementation_footer());

    [
        GeneratedArtifact::new(
            PathBuf::from("Base").join(format!("IUnitOfWork.{ext}")),
            interface,
        ),
        GeneratedArtifact::new(
            PathBuf::from("Base").join(format!("UnitOfWork.{ext}")),
            implementation,
        ),
    ]
}

/// The generic repository base pair. Independent of entity count; generated
/// exactly once per run.
pub fn compose_generic_repository(
    templates: &dyn TemplateSet,
    namespace: &str,
) -> [GeneratedArtifact; 2] {
    let ext = templates.source_extension();

    [
        GeneratedArtifact::new(
            PathBuf::from("Base").join(format!("IRepository.{ext}")),
            templates.generic_repository_interface(namespace),
        ),
        GeneratedArtifact::new(
            PathBuf::from("Base").join(format!("Repository.{ext}")),
            templates.generic_repository_implementation(namespace),
        ),
    ]
}

/// Compose the full plan for a run: per-entity pairs in entity order, then
/// the unit-of-work pair, then the generic base pair.
pub fn compose_all(
    templates: &dyn TemplateSet,
    namespace: &str,
    entities: &[EntityName],
    context: &ContextName,
) -> GenerationPlan {
    let mut plan = GenerationPlan::new();
    for entity in entities {
        plan.extend(compose_entity_pair(templates, namespace, entity, context));
    }
    plan.extend(compose_unit_of_work(templates, namespace, entities, context));
    plan.extend(compose_generic_repository(templates, namespace));
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal marker templates: unit tests here only assert on composition
    /// mechanics, not on real template text.
    struct StubTemplates;

    impl TemplateSet for StubTemplates {
        fn source_extension(&self) -> &str {
            "cs"
        }

        fn repository_interface(&self, namespace: &str, entity: &EntityName) -> String {
            format!("iface:{namespace}:{entity}")
        }

        fn repository_implementation(
            &self,
            namespace: &str,
            entity: &EntityName,
            context: &ContextName,
        ) -> String {
            format!("impl:{namespace}:{entity}:{context}")
        }

        fn unit_of_work_interface_header(&self, namespace: &str) -> String {
            format!("uow-iface-header:{namespace}\n")
        }

        fn unit_of_work_interface_property(&self, entity: &EntityName) -> String {
            format!("  prop {};\n", entity.repository_property())
        }

        fn unit_of_work_interface_footer(&self) -> String {
            "uow-iface-footer\n".into()
        }

        fn unit_of_work_implementation_header(
            &self,
            namespace: &str,
            context: &ContextName,
        ) -> String {
            format!("uow-impl-header:{namespace}:{context}\n")
        }

        fn unit_of_work_implementation_property(&self, entity: &EntityName) -> String {
            format!("  impl-prop {};\n", entity.repository_interface())
        }

        fn unit_of_work_implementation_footer(&self) -> String {
            "uow-impl-footer\n".into()
        }

        fn generic_repository_interface(&self, namespace: &str) -> String {
            format!("generic-iface:{namespace}")
        }

        fn generic_repository_implementation(&self, namespace: &str) -> String {
            format!("generic-impl:{namespace}")
        }
    }

    fn entity(name: &str) -> EntityName {
        EntityName::new(name).unwrap()
    }

    #[test]
    fn entity_pair_paths_and_bindings() {
        let ctx = ContextName::new("ShopDbContext").unwrap();
        let [iface, imp] = compose_entity_pair(&StubTemplates, "Shop", &entity("Order"), &ctx);

        assert_eq!(
            iface.path,
            PathBuf::from("Abstractions/IOrderRepository.cs")
        );
        assert_eq!(imp.path, PathBuf::from("Repositories/OrderRepository.cs"));
        assert_eq!(iface.content, "iface:Shop:Order");
        assert_eq!(imp.content, "impl:Shop:Order:ShopDbContext");
    }

    #[test]
    fn unit_of_work_concatenates_properties_in_entity_order() {
        let entities = vec![entity("Customer"), entity("Order")];
        let [iface, imp] =
            compose_unit_of_work(&StubTemplates, "Shop", &entities, &ContextName::default());

        let expected_iface = "uow-iface-header:Shop\n\
                              \x20 prop CustomerRepository;\n\
                              \x20 prop OrderRepository;\n\
                              uow-iface-footer\n";
        assert_eq!(iface.content, expected_iface);

        let customer_pos = imp.content.find("ICustomerRepository").unwrap();
        let order_pos = imp.content.find("IOrderRepository").unwrap();
        assert!(customer_pos < order_pos);
    }

    #[test]
    fn unit_of_work_with_zero_entities_is_header_plus_footer() {
        let [iface, _] = compose_unit_of_work(&StubTemplates, "Shop", &[], &ContextName::default());
        assert_eq!(iface.content, "uow-iface-header:Shop\nuow-iface-footer\n");
    }

    #[test]
    fn generic_pair_is_entity_independent() {
        let [iface, imp] = compose_generic_repository(&StubTemplates, "Shop");
        assert_eq!(iface.path, PathBuf::from("Base/IRepository.cs"));
        assert_eq!(imp.path, PathBuf::from("Base/Repository.cs"));
    }

    #[test]
    fn full_plan_has_two_per_entity_plus_four() {
        let entities = vec![entity("Customer"), entity("Order"), entity("Product")];
        let plan = compose_all(&StubTemplates, "Shop", &entities, &ContextName::default());

        assert_eq!(plan.len(), 2 * 3 + 4);
        plan.validate().unwrap();

        // Per-entity pairs first, aggregates last.
        let paths: Vec<_> = plan.paths().collect();
        assert_eq!(
            paths[0],
            std::path::Path::new("Abstractions/ICustomerRepository.cs")
        );
        assert_eq!(paths[6], std::path::Path::new("Base/IUnitOfWork.cs"));
        assert_eq!(paths[9], std::path::Path::new("Base/Repository.cs"));
    }

    #[test]
    fn adding_an_entity_appends_without_reordering() {
        let two = vec![entity("Customer"), entity("Order")];
        let three = vec![entity("Customer"), entity("Order"), entity("Product")];

        let [iface_two, _] =
            compose_unit_of_work(&StubTemplates, "Shop", &two, &ContextName::default());
        let [iface_three, _] =
            compose_unit_of_work(&StubTemplates, "Shop", &three, &ContextName::default());

        // The two-entity property block is a prefix of the three-entity one.
        let body_two = iface_two
            .content
            .strip_suffix("uow-iface-footer\n")
            .unwrap();
        assert!(iface_three.content.starts_with(body_two));
    }
}
