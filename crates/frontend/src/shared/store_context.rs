//! Хранилище данных приложения в реактивном контексте

use leptos::prelude::*;
use std::sync::Arc;
use store::projections::Projections;
use store::shared::config::{load_config, AppConfig, UiConfig};
use contracts::domain::common::Record;
use store::{AssetStore, Collection};

/// Ключ localStorage с TOML-переопределением конфигурации
pub const CONFIG_STORAGE_KEY: &str = "asset_care.config";

#[derive(Clone, Copy)]
pub struct StoreContext {
    pub store: RwSignal<AssetStore>,
    config: StoredValue<AppConfig>,
}

impl StoreContext {
    /// Загрузить конфигурацию и демонстрационные данные
    pub fn init() -> Self {
        let override_toml = read_config_override();
        let config = load_config(override_toml.as_deref()).unwrap_or_else(|e| {
            log::error!("Config load failed, defaults used: {}", e);
            AppConfig::default()
        });

        let asset_store = AssetStore::seeded().unwrap_or_else(|e| {
            log::error!("Seed data is broken: {}", e);
            AssetStore::from_tables(Default::default())
        });

        Self::new(asset_store, config)
    }

    pub fn new(asset_store: AssetStore, config: AppConfig) -> Self {
        Self {
            store: RwSignal::new(asset_store),
            config: StoredValue::new(config),
        }
    }

    /// Настройки интерфейса
    pub fn ui(&self) -> UiConfig {
        self.config.with_value(|c| c.ui.clone())
    }

    /// Представления текущей версии данных (отслеживается реактивно)
    pub fn projections(&self) -> Arc<Projections> {
        self.store.with(|s| s.projections())
    }

    /// Пункты выпадающего списка для ссылки на сущность `T`: (ID, подпись)
    pub fn options<T>(&self, label: fn(&T) -> String) -> Signal<Vec<(String, String)>>
    where
        T: Record + Send + Sync + 'static,
        AssetStore: Collection<T>,
    {
        let store = self.store;
        Signal::derive(move || {
            store.with(|s| {
                s.list::<T>()
                    .iter()
                    .map(|r| (r.id().to_string(), label(r)))
                    .collect()
            })
        })
    }
}

pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext not provided in context")
}

fn read_config_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}
