use crate::model::{BaseSnapshot, EnumModel};
use std::collections::HashMap;
use thiserror::Error as ThisError;

///
/// SnapshotError
///

#[derive(Debug, ThisError)]
pub enum SnapshotError {
    #[error("malformed snapshot artifact: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize a model's base snapshot as the cross-assembly metadata
/// artifact. Only the snapshot travels, never the full model.
pub fn export(model: &EnumModel) -> Result<String, SnapshotError> {
    let json = serde_json::to_string_pretty(&model.snapshot())?;

    Ok(json)
}

/// Parse one snapshot artifact produced by another compilation.
pub fn import(json: &str) -> Result<BaseSnapshot, SnapshotError> {
    let snapshot = serde_json::from_str(json)?;

    Ok(snapshot)
}

/// Parse a set of snapshot artifacts into the imported-base map the
/// resolver consumes, keyed by fully-qualified type name.
pub fn import_all<'a, I>(artifacts: I) -> Result<HashMap<String, BaseSnapshot>, SnapshotError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut imported = HashMap::new();
    for json in artifacts {
        let snapshot = import(json)?;
        imported.insert(snapshot.ident.fqn(), snapshot);
    }

    Ok(imported)
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::model::{CtorArg, CtorShape, KeyMember, Settings, TypeIdent};

    fn model() -> EnumModel {
        EnumModel {
            ident: TypeIdent::new("palette", "Color"),
            key: KeyMember {
                name: "code".to_string(),
                ty: "String".to_string(),
                case_insensitive: true,
                nullable: false,
            },
            items: Vec::new(),
            members: Vec::new(),
            settings: Settings::default(),
            base_path: None,
            base: None,
            ctor_shapes: Some(vec![CtorShape::new(vec![CtorArg::new("code", "String")])]),
            derived_types: Vec::new(),
            generic_subtypes: Vec::new(),
        }
    }

    #[test]
    fn exported_snapshot_imports_under_its_fqn() {
        let json = export(&model()).unwrap();

        let imported = import_all([json.as_str()]).unwrap();
        let snapshot = &imported["palette::Color"];

        assert_eq!(snapshot.ident, TypeIdent::new("palette", "Color"));
        assert!(snapshot.key.case_insensitive);
        assert_eq!(snapshot.ctor_shapes.len(), 1);
    }

    #[test]
    fn malformed_artifacts_fail_with_the_parse_error() {
        assert!(matches!(
            import("{ not json"),
            Err(SnapshotError::Malformed(_))
        ));
    }
}
