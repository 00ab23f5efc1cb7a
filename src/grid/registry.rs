use super::{BUILTIN_VARIANTS, DEFAULT_VARIANT_ID, GridVariant, GridVariantSummary};
use crate::error::{LayoutError, VariantError};
use crate::log::log_event;

/// Way of naming a variant: by numeric id or by key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantRef<'a> {
    Id(u8),
    Key(&'a str),
}

impl VariantRef<'_> {
    fn matches(self, variant: &GridVariant) -> bool {
        match self {
            VariantRef::Id(id) => variant.id == id,
            VariantRef::Key(key) => variant.key == key,
        }
    }
}

/// Catalog of layouts with exactly one active entry.
///
/// The registry never persists the selection; callers store
/// `active_id()` themselves if they need it across reboots.
#[derive(Debug, Clone, Copy)]
pub struct GridRegistry {
    catalog: &'static [GridVariant],
    active: usize,
}

impl GridRegistry {
    /// Registry over the shipped layouts, with the default variant active.
    pub fn builtin() -> Self {
        let active = BUILTIN_VARIANTS
            .iter()
            .position(|variant| variant.id == DEFAULT_VARIANT_ID)
            .unwrap_or(0);
        Self {
            catalog: &BUILTIN_VARIANTS,
            active,
        }
    }

    /// Registry over a custom catalog. The first entry becomes active.
    pub fn with_catalog(catalog: &'static [GridVariant]) -> Result<Self, LayoutError> {
        if catalog.is_empty() {
            return Err(LayoutError::EmptyCatalog);
        }
        for (position, variant) in catalog.iter().enumerate() {
            let duplicate = catalog[..position]
                .iter()
                .any(|earlier| earlier.id == variant.id || earlier.key == variant.key);
            if duplicate {
                return Err(LayoutError::DuplicateVariant {
                    id: variant.id,
                    key: variant.key,
                });
            }
            variant.validate()?;
        }
        Ok(Self { catalog, active: 0 })
    }

    pub fn catalog(&self) -> &'static [GridVariant] {
        self.catalog
    }

    pub fn list(&self) -> impl Iterator<Item = GridVariantSummary> + '_ {
        self.catalog.iter().map(GridVariant::summary)
    }

    /// Summaries paired with a flag marking the active entry
    pub fn list_with_active(&self) -> impl Iterator<Item = (GridVariantSummary, bool)> + '_ {
        self.catalog
            .iter()
            .enumerate()
            .map(move |(position, variant)| (variant.summary(), position == self.active))
    }

    pub fn get(&self, variant: VariantRef<'_>) -> Result<&'static GridVariant, VariantError> {
        self.position(variant)
            .map(|position| &self.catalog[position])
            .ok_or(VariantError::NotFound)
    }

    /// Make `variant` the active layout.
    ///
    /// On failure the previous selection stays active.
    pub fn set_active(
        &mut self,
        variant: VariantRef<'_>,
    ) -> Result<&'static GridVariant, VariantError> {
        let Some(position) = self.position(variant) else {
            log_event!("[grid] unknown variant {:?}, keeping {}", variant, self.active().key);
            return Err(VariantError::NotFound);
        };
        if position != self.active {
            log_event!(
                "[grid] active variant {} -> {}",
                self.active().key,
                self.catalog[position].key
            );
        }
        self.active = position;
        Ok(&self.catalog[position])
    }

    pub fn active(&self) -> &'static GridVariant {
        let catalog = self.catalog;
        &catalog[self.active]
    }

    pub fn active_id(&self) -> u8 {
        self.active().id
    }

    /// Id for `key`, or the id of the first entry when the key is unknown
    pub fn id_for_key(&self, key: &str) -> u8 {
        self.get(VariantRef::Key(key))
            .unwrap_or(&self.catalog[0])
            .id
    }

    /// Key for `id`, or the key of the first entry when the id is unknown
    pub fn key_for_id(&self, id: u8) -> &'static str {
        self.get(VariantRef::Id(id))
            .unwrap_or(&self.catalog[0])
            .key
    }

    fn position(&self, variant: VariantRef<'_>) -> Option<usize> {
        self.catalog
            .iter()
            .position(|candidate| variant.matches(candidate))
    }
}

impl Default for GridRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
