use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::ShotIndex,
        error::{PlanError, PlanResult},
    },
    shots::model::{Shot, ShotRecord},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
/// Ordered, validated shot list; the sole input of the pipeline.
///
/// Indices are strictly increasing in iteration order. Construction validates every record
/// before anything is kept, so a failed build never leaves a partial registry behind.
pub struct ShotRegistry {
    shots: Vec<Shot>,
}

impl ShotRegistry {
    /// Validate `records` in order and build a registry.
    ///
    /// Input order is preserved; a record whose index is not greater than its predecessor's
    /// is rejected rather than re-sorted.
    #[tracing::instrument(skip(records))]
    pub fn new(records: impl IntoIterator<Item = ShotRecord>) -> PlanResult<Self> {
        let mut shots = Vec::<Shot>::new();
        for record in records {
            let shot = Shot::new(record)?;
            if let Some(prev) = shots.last()
                && shot.index() <= prev.index()
            {
                return Err(PlanError::invalid_shot(
                    i64::from(shot.index().0),
                    format!(
                        "index must be greater than the previous shot's index {}",
                        prev.index()
                    ),
                ));
            }
            shots.push(shot);
        }
        tracing::debug!(shots = shots.len(), "shot registry built");
        Ok(Self { shots })
    }

    /// Parse a JSON array of shot records and validate it.
    pub fn from_json_str(s: &str) -> PlanResult<Self> {
        let records: Vec<ShotRecord> = serde_json::from_str(s)
            .map_err(|e| PlanError::serde(format!("parse shot list JSON: {e}")))?;
        Self::new(records)
    }

    /// Parse a JSON array of shot records from a reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PlanResult<Self> {
        let records: Vec<ShotRecord> = serde_json::from_reader(r)
            .map_err(|e| PlanError::serde(format!("parse shot list JSON: {e}")))?;
        Self::new(records)
    }

    /// Parse a JSON shot list from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PlanResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PlanError::Other(anyhow::anyhow!(
                "open shot list '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Shots in presentation order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Iterate shots in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shot> {
        self.shots.iter()
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// Whether the registry holds no shots.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Look up a shot by index.
    pub fn get(&self, index: ShotIndex) -> Option<&Shot> {
        self.shots
            .binary_search_by_key(&index, Shot::index)
            .ok()
            .map(|i| &self.shots[i])
    }

    /// Copy every shot back out as raw records, in order.
    pub fn records(&self) -> Vec<ShotRecord> {
        self.shots.iter().map(Shot::to_record).collect()
    }
}

impl<'a> IntoIterator for &'a ShotRegistry {
    type Item = &'a Shot;
    type IntoIter = std::slice::Iter<'a, Shot>;

    fn into_iter(self) -> Self::IntoIter {
        self.shots.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shots/registry.rs"]
mod tests;
