use std::collections::HashMap;

use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud::api;

type Drafts = HashMap<&'static str, String>;

/// Form state for one record of `T`
pub struct EntityFormViewModel<T: EntityRecord> {
    /// Last record loaded from the server, drafts are applied on top of it
    pub record: RwSignal<T>,
    pub drafts: RwSignal<Drafts>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    original_id: StoredValue<Option<String>>,
}

impl<T: EntityRecord> Clone for EntityFormViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: EntityRecord> Copy for EntityFormViewModel<T> {}

/// Raw text of every form field
fn drafts_from<T: EntityRecord>(record: &T) -> Drafts {
    T::form_fields()
        .into_iter()
        .map(|field| (field.name, record.field_raw(field.name)))
        .collect()
}

/// Apply the drafts to a copy of `base` and validate the result
pub(crate) fn build_record<T: EntityRecord>(base: &T, drafts: &Drafts) -> Result<T, String> {
    let mut record = base.clone();
    for field in T::form_fields() {
        let raw = drafts.get(field.name).map(String::as_str).unwrap_or("");
        record.assign(field, raw)?;
    }
    record.validate()?;
    Ok(record)
}

impl<T: EntityRecord> EntityFormViewModel<T> {
    pub fn new(record: Option<T>) -> Self {
        let original_id = record.as_ref().and_then(|r| r.id_string());
        let record = record.unwrap_or_default();
        Self {
            drafts: RwSignal::new(drafts_from(&record)),
            record: RwSignal::new(record),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            original_id: StoredValue::new(original_id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.original_id.with_value(|id| id.is_some())
    }

    pub fn draft(&self, name: &'static str) -> String {
        self.drafts
            .with(|d| d.get(name).cloned())
            .unwrap_or_default()
    }

    pub fn set_draft(&self, name: &'static str, value: String) {
        self.drafts.update(|d| {
            d.insert(name, value);
        });
    }

    /// Refresh the record from the server when editing
    pub fn load_if_needed(&self) {
        let Some(id) = self.original_id.get_value() else {
            return;
        };
        let vm = *self;
        spawn_local(async move {
            match api::fetch_by_id::<T>(&id).await {
                Ok(record) => {
                    vm.drafts.set(drafts_from(&record));
                    vm.record.set(record);
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", id, e);
                    vm.error.set(Some(format!("Error al cargar: {}", e)));
                }
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let record = match self
            .record
            .with_untracked(|base| self.drafts.with_untracked(|d| build_record(base, d)))
        {
            Ok(record) => record,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        self.error.set(None);
        self.saving.set(true);
        let vm = *self;
        let original_id = self.original_id.get_value();
        spawn_local(async move {
            let result = match &original_id {
                Some(id) => api::update(id, &record).await,
                None => api::create(&record).await,
            };
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!(
                        "saved {} {}",
                        T::entity_metadata_info().entity_name,
                        original_id.as_deref().unwrap_or("(new)")
                    );
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(format!("Error al guardar: {}", e))),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::Customer;

    #[test]
    fn test_build_record_applies_drafts() {
        let base = Customer {
            id: Some("ALFKI".to_string()),
            company_name: Some("Alfreds".to_string()),
            ..Default::default()
        };
        let mut drafts = drafts_from(&base);
        assert!(!drafts.contains_key("id"));
        drafts.insert("contactName", "Maria Anders".to_string());
        drafts.insert("city", " Berlin ".to_string());

        let record = build_record(&base, &drafts).unwrap();
        assert_eq!(record.id_string(), Some("ALFKI".to_string()));
        assert_eq!(record.contact_name.as_deref(), Some("Maria Anders"));
        assert_eq!(record.city.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_build_record_rejects_missing_required() {
        let drafts = drafts_from(&Customer::default());
        assert_eq!(
            build_record(&Customer::default(), &drafts),
            Err("El campo 'Empresa' es obligatorio".to_string())
        );
    }
}
