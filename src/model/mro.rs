//! C3 linearization of model type hierarchies

use crate::error::ManifestError;
use crate::model::{ModelDecl, ModelId};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Compute the MRO of every declared type (and of every base they reference).
pub fn linearize_all(
    decls: &BTreeMap<ModelId, ModelDecl>,
) -> Result<HashMap<ModelId, Vec<ModelId>>, ManifestError> {
    let mut done = HashMap::new();
    let mut visiting = HashSet::new();
    for model in decls.keys() {
        linearize(model, decls, &mut done, &mut visiting)?;
    }
    Ok(done)
}

fn linearize(
    model: &ModelId,
    decls: &BTreeMap<ModelId, ModelDecl>,
    done: &mut HashMap<ModelId, Vec<ModelId>>,
    visiting: &mut HashSet<ModelId>,
) -> Result<Vec<ModelId>, ManifestError> {
    if let Some(mro) = done.get(model) {
        return Ok(mro.clone());
    }
    // Re-entering a type that is still being linearized means it inherits from itself.
    if !visiting.insert(model.clone()) {
        return Err(ManifestError::InconsistentMro(model.clone()));
    }

    let bases: &[ModelId] = decls
        .get(model)
        .map(|decl| decl.bases.as_slice())
        .unwrap_or(&[]);

    let mut sequences = Vec::with_capacity(bases.len() + 1);
    for base in bases {
        sequences.push(linearize(base, decls, done, visiting)?);
    }
    sequences.push(bases.to_vec());

    let mut mro = vec![model.clone()];
    mro.extend(merge(sequences).ok_or_else(|| ManifestError::InconsistentMro(model.clone()))?);

    visiting.remove(model);
    done.insert(model.clone(), mro.clone());
    Ok(mro)
}

/// C3 merge step. Returns `None` when no consistent order exists.
fn merge(mut sequences: Vec<Vec<ModelId>>) -> Option<Vec<ModelId>> {
    let mut result = Vec::new();
    loop {
        sequences.retain(|seq| !seq.is_empty());
        if sequences.is_empty() {
            return Some(result);
        }

        let candidate = sequences
            .iter()
            .map(|seq| &seq[0])
            .find(|head| !sequences.iter().any(|seq| seq[1..].contains(*head)))?
            .clone();

        for seq in sequences.iter_mut() {
            if seq[0] == candidate {
                seq.remove(0);
            }
        }
        result.push(candidate);
    }
}
