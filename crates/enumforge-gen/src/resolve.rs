use crate::{
    diagnostic::{Diagnostic, DiagnosticKind},
    model::{BaseEnumState, BaseSnapshot, CtorArg, CtorShape, EnumModel},
};
use std::collections::{HashMap, HashSet};

///
/// ResolveContext
///
/// Where base snapshots come from: models extracted in this pass
/// (same-assembly) and snapshots imported from other compilations
/// (cross-assembly). The variant is decided here, exactly once.
///

pub struct ResolveContext<'a> {
    pub same_assembly: &'a HashMap<String, BaseSnapshot>,
    pub imported: &'a HashMap<String, BaseSnapshot>,
}

/// Resolve a model's base chain and fill in its merged constructor shapes.
///
/// Models without a base get a single own-level shape. A declared base that
/// is not a smart enum known to this pass is a scoped diagnostic.
pub fn resolve(model: &mut EnumModel, ctx: &ResolveContext<'_>) -> Result<(), Diagnostic> {
    let own = model.own_ctor_args();

    let Some(base_path) = &model.base_path else {
        model.ctor_shapes = Some(vec![CtorShape::new(own)]);
        return Ok(());
    };

    let state = if let Some(snapshot) = ctx.same_assembly.get(base_path) {
        BaseEnumState::SameAssembly(snapshot.clone())
    } else if let Some(snapshot) = ctx.imported.get(base_path) {
        BaseEnumState::CrossAssembly(snapshot.clone())
    } else {
        return Err(Diagnostic::new(
            model.ident.fqn(),
            DiagnosticKind::UnknownBase,
            format!("base type '{base_path}' is not a smart enum known to this pass"),
        ));
    };

    model.ctor_shapes = Some(merge_ctor_shapes(state.snapshot(), &own));
    model.base = Some(state);

    Ok(())
}

/// Merge base constructor shapes with the derived type's own arguments.
///
/// Base shapes are deduplicated by argument types only, so same-shaped
/// overloads collapse to one. Each surviving shape contributes one derived
/// shape: base arguments first (renamed on collision with an own-level or
/// key argument name, integer suffix until unique), own arguments appended.
pub fn merge_ctor_shapes(base: &BaseSnapshot, own: &[CtorArg]) -> Vec<CtorShape> {
    let mut seen: Vec<Vec<&str>> = Vec::new();
    let mut distinct: Vec<&CtorShape> = Vec::new();
    for shape in &base.ctor_shapes {
        let signature = shape.type_signature();
        if !seen.contains(&signature) {
            seen.push(signature);
            distinct.push(shape);
        }
    }
    if distinct.is_empty() {
        return vec![CtorShape::new(own.to_vec())];
    }

    let own_names: HashSet<&str> = own.iter().map(|arg| arg.name.as_str()).collect();

    distinct
        .into_iter()
        .map(|shape| {
            let base_names: HashSet<&str> =
                shape.args.iter().map(|arg| arg.name.as_str()).collect();
            let mut used: HashSet<String> =
                own_names.iter().map(ToString::to_string).collect();
            let mut args = Vec::with_capacity(shape.args.len() + own.len());

            for arg in &shape.args {
                let mut name = arg.name.clone();
                if used.contains(&name) {
                    // a rename must not steal the name of another base arg
                    let mut n = 1;
                    name = loop {
                        let candidate = format!("{}{n}", arg.name);
                        if !used.contains(&candidate) && !base_names.contains(candidate.as_str())
                        {
                            break candidate;
                        }
                        n += 1;
                    };
                }
                used.insert(name.clone());
                args.push(CtorArg::new(name, &arg.ty));
            }

            args.extend(own.iter().cloned());
            CtorShape::new(args)
        })
        .collect()
}
