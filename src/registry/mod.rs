//! Test registry and convention-based discovery.
//!
//! Modules hold free test cases and named groups of cases, in registration
//! order. Discovery collects the runnable instances: names must carry the
//! `test` prefix (groups the `Test` prefix), and a parametrized case expands
//! into one instance per (input, expected) tuple. Skip-marked cases are
//! collected so the runner can report them as skipped.

use crate::error::{RegistryError, RegistryResult};
use crate::fixtures::{FixtureRegistry, FixtureSet};
use crate::model::case::CASE_PREFIX;
use crate::model::{CaseBody, CaseId, CaseKind, CaseResult, ParamBody, TestCase};
use serde_json::Value;
use tracing::debug;

/// Prefix a group name must carry for its methods to be collected.
const GROUP_PREFIX: &str = "Test";

/// A named grouping of test cases.
///
/// Groups are a namespacing convention only: one level deep, no inheritance.
#[derive(Debug, Clone)]
pub struct TestGroup {
    /// Group name; discovery requires the `Test` prefix.
    pub name: String,
    cases: Vec<TestCase>,
}

impl TestGroup {
    /// Create an empty group.
    pub fn new(name: &str) -> Self {
        TestGroup {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    /// Add a case to the group. Method names are unique within the group.
    pub fn add_case(&mut self, case: TestCase) -> RegistryResult<()> {
        if self.cases.iter().any(|c| c.name == case.name) {
            return Err(RegistryError::DuplicateCase {
                scope: self.name.clone(),
                name: case.name,
            });
        }
        self.cases.push(case);
        Ok(())
    }

    /// Cases in registration order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Whether discovery collects this group's methods.
    pub fn is_discoverable(&self) -> bool {
        self.name.starts_with(GROUP_PREFIX)
    }
}

/// One registered entry of a module, preserving file order.
#[derive(Debug, Clone)]
enum ModuleEntry {
    Case(TestCase),
    Group(TestGroup),
}

/// A named flat collection of test cases and groups.
#[derive(Debug, Clone)]
pub struct TestModule {
    /// Module name, the first segment of every contained case id.
    pub name: String,
    entries: Vec<ModuleEntry>,
}

impl TestModule {
    /// Create an empty module.
    pub fn new(name: &str) -> Self {
        TestModule {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Add a free test case. Case names are unique at module scope.
    pub fn add_case(&mut self, case: TestCase) -> RegistryResult<()> {
        let duplicate = self.entries.iter().any(|entry| match entry {
            ModuleEntry::Case(existing) => existing.name == case.name,
            ModuleEntry::Group(_) => false,
        });
        if duplicate {
            return Err(RegistryError::DuplicateCase {
                scope: self.name.clone(),
                name: case.name,
            });
        }
        self.entries.push(ModuleEntry::Case(case));
        Ok(())
    }

    /// Add a group. Group names are unique within the module.
    pub fn add_group(&mut self, group: TestGroup) -> RegistryResult<()> {
        let duplicate = self.entries.iter().any(|entry| match entry {
            ModuleEntry::Group(existing) => existing.name == group.name,
            ModuleEntry::Case(_) => false,
        });
        if duplicate {
            return Err(RegistryError::DuplicateGroup {
                module: self.name.clone(),
                name: group.name,
            });
        }
        self.entries.push(ModuleEntry::Group(group));
        Ok(())
    }
}

/// How a collected instance invokes its body.
#[derive(Clone)]
enum Invocation {
    Plain(CaseBody),
    Param {
        body: ParamBody,
        input: Value,
        expected: Value,
    },
}

/// A runnable test-case instance produced by discovery.
///
/// Parametrized cases contribute one instance per tuple; everything the
/// runner needs (id, skip reason, fixture names, body) is captured here.
#[derive(Clone)]
pub struct CollectedCase {
    /// Full path of this instance
    pub id: CaseId,
    /// Skip reason carried over from the case definition
    pub skip_reason: Option<String>,
    /// Declared fixture dependencies
    pub fixtures: Vec<String>,
    invocation: Invocation,
}

impl CollectedCase {
    /// Invoke the body with the resolved fixtures.
    pub fn invoke(&self, fixtures: &FixtureSet) -> CaseResult {
        match &self.invocation {
            Invocation::Plain(body) => body(fixtures),
            Invocation::Param {
                body,
                input,
                expected,
            } => body(input, expected),
        }
    }
}

/// Ordered set of modules plus the fixture providers they share.
#[derive(Clone, Default)]
pub struct TestRegistry {
    modules: Vec<TestModule>,
    fixtures: FixtureRegistry,
}

impl TestRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        TestRegistry::default()
    }

    /// Register a module. Module names are unique.
    pub fn add_module(&mut self, module: TestModule) -> RegistryResult<()> {
        if self.modules.iter().any(|m| m.name == module.name) {
            return Err(RegistryError::DuplicateModule(module.name));
        }
        self.modules.push(module);
        Ok(())
    }

    /// The fixture providers available to collected cases.
    pub fn fixtures(&self) -> &FixtureRegistry {
        &self.fixtures
    }

    /// Mutable access for registering fixture providers.
    pub fn fixtures_mut(&mut self) -> &mut FixtureRegistry {
        &mut self.fixtures
    }

    /// Discover and expand all runnable case instances, in registration order.
    pub fn collect(&self) -> Vec<CollectedCase> {
        let mut collected = Vec::new();
        for module in &self.modules {
            for entry in &module.entries {
                match entry {
                    ModuleEntry::Case(case) => {
                        expand_case(&mut collected, &module.name, None, case);
                    }
                    ModuleEntry::Group(group) => {
                        if !group.is_discoverable() {
                            debug!(
                                "Group '{}' in module '{}' does not match the '{}' prefix, not collected",
                                group.name, module.name, GROUP_PREFIX
                            );
                            continue;
                        }
                        for case in group.cases() {
                            expand_case(&mut collected, &module.name, Some(&group.name), case);
                        }
                    }
                }
            }
        }
        collected
    }
}

/// Expand one case definition into collected instances.
fn expand_case(
    collected: &mut Vec<CollectedCase>,
    module: &str,
    group: Option<&str>,
    case: &TestCase,
) {
    if !case.is_discoverable() {
        debug!(
            "Case '{}' does not match the '{}' prefix, not collected",
            case.name, CASE_PREFIX
        );
        return;
    }
    match &case.kind {
        CaseKind::Plain(body) => {
            collected.push(CollectedCase {
                id: CaseId::new(module, group, &case.name),
                skip_reason: case.skip_reason.clone(),
                fixtures: case.fixtures.clone(),
                invocation: Invocation::Plain(body.clone()),
            });
        }
        CaseKind::Parametrized { params, body } => {
            for (input, expected) in params {
                let name = format!("{}[{}]", case.name, input);
                collected.push(CollectedCase {
                    id: CaseId::new(module, group, &name),
                    skip_reason: case.skip_reason.clone(),
                    fixtures: case.fixtures.clone(),
                    invocation: Invocation::Param {
                        body: body.clone(),
                        input: input.clone(),
                        expected: expected.clone(),
                    },
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ensure;
    use serde_json::json;

    fn passing(name: &str) -> TestCase {
        TestCase::new(name, |_| ensure(true, "ok"))
    }

    #[test]
    fn test_collection_order_and_ids() {
        let mut group = TestGroup::new("TestClass");
        group.add_case(passing("test_method_one")).unwrap();
        group.add_case(passing("test_method_two")).unwrap();

        let mut module = TestModule::new("module1");
        module.add_group(group).unwrap();
        module.add_case(passing("test_outside_class")).unwrap();

        let mut registry = TestRegistry::new();
        registry.add_module(module).unwrap();

        let ids: Vec<String> = registry
            .collect()
            .iter()
            .map(|c| c.id.path().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "module1::TestClass::test_method_one",
                "module1::TestClass::test_method_two",
                "module1::test_outside_class",
            ]
        );
    }

    #[test]
    fn test_prefix_convention_filters() {
        let mut module = TestModule::new("module1");
        module.add_case(passing("helper_function")).unwrap();
        module.add_case(passing("test_real")).unwrap();

        let mut helpers = TestGroup::new("Helpers");
        helpers.add_case(passing("test_inside_helper")).unwrap();
        module.add_group(helpers).unwrap();

        let mut group = TestGroup::new("TestGroup");
        group.add_case(passing("setup_method")).unwrap();
        group.add_case(passing("test_method")).unwrap();
        module.add_group(group).unwrap();

        let mut registry = TestRegistry::new();
        registry.add_module(module).unwrap();

        let ids: Vec<String> = registry
            .collect()
            .iter()
            .map(|c| c.id.path().to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["module1::test_real", "module1::TestGroup::test_method"]
        );
    }

    #[test]
    fn test_parametrized_expansion() {
        let mut module = TestModule::new("module1");
        module
            .add_case(TestCase::parametrized(
                "test_parametrized",
                vec![(json!(1), json!(1)), (json!(2), json!(4)), (json!(3), json!(9))],
                |_, _| Ok(()),
            ))
            .unwrap();

        let mut registry = TestRegistry::new();
        registry.add_module(module).unwrap();

        let ids: Vec<String> = registry
            .collect()
            .iter()
            .map(|c| c.id.path().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "module1::test_parametrized[1]",
                "module1::test_parametrized[2]",
                "module1::test_parametrized[3]",
            ]
        );
    }

    #[test]
    fn test_skip_marked_cases_are_collected() {
        let mut module = TestModule::new("module2");
        module
            .add_case(passing("test_skipped").skipped("Example of skipped test"))
            .unwrap();

        let mut registry = TestRegistry::new();
        registry.add_module(module).unwrap();

        let collected = registry.collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(
            collected[0].skip_reason.as_deref(),
            Some("Example of skipped test")
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut module = TestModule::new("module1");
        module.add_case(passing("test_a")).unwrap();
        let err = module.add_case(passing("test_a")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCase { .. }));

        let mut group = TestGroup::new("TestClass");
        group.add_case(passing("test_b")).unwrap();
        let err = group.add_case(passing("test_b")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCase { .. }));

        module.add_group(TestGroup::new("TestClass")).unwrap();
        let err = module.add_group(TestGroup::new("TestClass")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateGroup { .. }));

        let mut registry = TestRegistry::new();
        registry.add_module(TestModule::new("module1")).unwrap();
        let err = registry.add_module(TestModule::new("module1")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateModule(_)));
    }

    #[test]
    fn test_collection_follows_case_discoverability() {
        let helper = passing("setup_only");
        assert!(!helper.is_discoverable());

        let mut module = TestModule::new("module1");
        module.add_case(helper).unwrap();

        let mut registry = TestRegistry::new();
        registry.add_module(module).unwrap();
        assert!(registry.collect().is_empty());
    }

    #[test]
    fn test_same_name_allowed_in_different_scopes() {
        // A free function and a group method may share a name.
        let mut module = TestModule::new("module1");
        module.add_case(passing("test_shared")).unwrap();

        let mut group = TestGroup::new("TestClass");
        group.add_case(passing("test_shared")).unwrap();
        module.add_group(group).unwrap();

        let mut registry = TestRegistry::new();
        registry.add_module(module).unwrap();
        assert_eq!(registry.collect().len(), 2);
    }
}
