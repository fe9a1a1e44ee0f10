//! Collection wrapper types for displaying groups of plants.

use std::fmt;

use crate::models::PlantRecord;

/// Newtype wrapper for displaying a compact list of catalog plants.
///
/// # Examples
///
/// ```rust
/// use furrow_core::{display::Plants, models::{PlantRecord, PlantRule}};
///
/// let plants = Plants(vec![PlantRecord::from(PlantRule::new(3, "Lettuce"))]);
/// assert!(plants.to_string().contains("3. Lettuce"));
/// assert_eq!(Plants(vec![]).to_string(), "No plants found.\n");
/// ```
pub struct Plants(pub Vec<PlantRecord>);

impl Plants {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plants in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plants.
    pub fn iter(&self) -> std::slice::Iter<'_, PlantRecord> {
        self.0.iter()
    }
}

impl IntoIterator for Plants {
    type Item = PlantRecord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Plants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plants found.");
        }

        for plant in &self.0 {
            let marker = if plant.is_favorite { "★" } else { "☆" };
            write!(f, "- {marker} {}. {}", plant.id(), plant.name())?;
            if let Some(desc) = &plant.description {
                write!(f, ": {desc}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
