//! Единый сценарий CRUD для страниц сущностей
//!
//! Черновик формы живёт в `form`, проверка выполняется хранилищем без
//! изменения данных, затем после имитации задержки применяется мутация.

use contracts::domain::common::Record;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use store::shared::error::StoreResult;
use store::{AssetStore, Collection};
use wasm_bindgen_futures::spawn_local;

use crate::shared::data_table::ColumnSpec;
use crate::shared::icons::icon;
use crate::shared::list_utils::CellValue;
use crate::shared::store_context::{use_store, StoreContext};
use crate::shared::toast::{use_notifications, NotificationService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

pub struct CrudViewModel<T: Send + Sync + 'static> {
    pub form: RwSignal<T>,
    pub mode: RwSignal<FormMode>,
    pub open: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    /// ID записи, ожидающей подтверждения удаления
    pub pending_delete: RwSignal<Option<String>>,
    pub confirm_open: RwSignal<bool>,
    store: StoreContext,
    notify: NotificationService,
}

impl<T: Send + Sync + 'static> Clone for CrudViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CrudViewModel<T> {}

impl<T> CrudViewModel<T>
where
    T: Record + Default + Send + Sync + 'static,
    AssetStore: Collection<T>,
{
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(T::default()),
            mode: RwSignal::new(FormMode::Create),
            open: RwSignal::new(false),
            busy: RwSignal::new(false),
            pending_delete: RwSignal::new(None),
            confirm_open: RwSignal::new(false),
            store: use_store(),
            notify: use_notifications(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.mode.get() == FormMode::Edit
    }

    /// Заголовок диалога по режиму
    pub fn title(&self) -> String {
        match self.mode.get() {
            FormMode::Create => format!("Thêm {}", T::element_name().to_lowercase()),
            FormMode::Edit => format!("Sửa {}", T::element_name().to_lowercase()),
        }
    }

    /// Новый черновик с предложенным кодом
    pub fn open_create(&self) {
        let mut draft = T::default();
        draft.set_id(self.store.store.with_untracked(|s| s.next_id::<T>()));
        self.form.set(draft);
        self.mode.set(FormMode::Create);
        self.open.set(true);
    }

    pub fn open_edit(&self, record: T) {
        self.form.set(record);
        self.mode.set(FormMode::Edit);
        self.open.set(true);
    }

    pub fn close(&self) {
        if !self.busy.get_untracked() {
            self.open.set(false);
        }
    }

    /// Изменить поле черновика
    pub fn edit(&self, f: impl FnOnce(&mut T)) {
        self.form.update(f);
    }

    pub fn submit(&self) {
        if self.busy.get_untracked() {
            return;
        }

        let record = self.form.get_untracked();
        let mode = self.mode.get_untracked();
        let check = self.store.store.with_untracked(|s| match mode {
            FormMode::Create => s.validate_create(&record),
            FormMode::Edit => s.validate_update(&record),
        });
        if let Err(e) = check {
            log::warn!("{} rejected: {}", T::full_name(), e);
            self.notify.error("Lỗi", Some(e.to_string()));
            return;
        }

        self.busy.set(true);
        let latency = self.store.ui().simulated_latency_ms;
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(latency).await;
            let id = record.id().to_string();
            let result = this.store.store.try_update(|s| apply(s, record, mode));
            this.busy.try_set(false);

            match result {
                None => {
                    log::warn!("{} {} not saved: store is no longer available", T::full_name(), id);
                }
                Some(Ok(())) => {
                    log::info!("{} {} saved", T::full_name(), id);
                    this.open.set(false);
                    let title = match mode {
                        FormMode::Create => format!("Thêm {} thành công", T::element_name().to_lowercase()),
                        FormMode::Edit => format!("Cập nhật {} thành công", T::element_name().to_lowercase()),
                    };
                    this.notify.success(title, None);
                }
                Some(Err(e)) => {
                    log::warn!("{} {} not saved: {}", T::full_name(), id, e);
                    this.notify.error("Lỗi", Some(e.to_string()));
                }
            }
        });
    }

    /// Запросить удаление: открывает окно подтверждения
    pub fn request_delete(&self, id: String) {
        self.pending_delete.set(Some(id));
        self.confirm_open.set(true);
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
        self.confirm_open.set(false);
    }

    pub fn delete_message(&self) -> String {
        match self.pending_delete.get() {
            Some(id) => format!("Bạn có chắc muốn xóa {} {}?", T::element_name().to_lowercase(), id),
            None => String::new(),
        }
    }

    pub fn confirm_delete(&self) {
        self.confirm_open.set(false);
        let Some(id) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);

        let result = self
            .store
            .store
            .try_update(|s| s.delete::<T>(&id).map(|_| ()));
        match result {
            None => {
                log::warn!("{} {} not deleted: store is no longer available", T::full_name(), id);
            }
            Some(Ok(())) => {
                log::info!("{} {} deleted", T::full_name(), id);
                self.notify
                    .success(format!("Xóa {} thành công", T::element_name().to_lowercase()), None);
            }
            Some(Err(e)) => {
                log::warn!("{} {} not deleted: {}", T::full_name(), id, e);
                self.notify.error("Lỗi", Some(e.to_string()));
            }
        }
    }
}

fn apply<T: Record>(store: &mut AssetStore, record: T, mode: FormMode) -> StoreResult<()>
where
    AssetStore: Collection<T>,
{
    match mode {
        FormMode::Create => store.create(record),
        FormMode::Edit => store.update(record),
    }
}

/// Колонка с кнопкой удаления; клик не передаётся строке
pub fn delete_column<T, R>(vm: CrudViewModel<R>, id_of: fn(&T) -> String) -> ColumnSpec<T>
where
    T: 'static,
    R: Record + Default + Send + Sync + 'static,
    AssetStore: Collection<R>,
{
    ColumnSpec::new("actions", "Thao tác", |_: &T| CellValue::Empty)
        .unsortable()
        .render_with(move |row: &T| {
            let id = id_of(row);
            view! {
                <button
                    class="button button--icon button--danger"
                    title="Xóa"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        vm.request_delete(id.clone());
                    }
                >
                    {icon("trash")}
                </button>
            }
            .into_any()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::ToastKind;
    use contracts::domain::a001_device::aggregate::Device;
    use store::shared::config::AppConfig;

    /// Модель формы устройств поверх демонстрационных данных.
    /// Уведомления без автоскрытия, таймеры здесь не запускаются
    fn with_device_vm(f: impl FnOnce(CrudViewModel<Device>, StoreContext, NotificationService)) {
        let owner = Owner::new();
        owner.with(|| {
            let store = StoreContext::new(AssetStore::seeded().unwrap(), AppConfig::default());
            let notify = NotificationService::new(0);
            provide_context(store);
            provide_context(notify);
            f(CrudViewModel::<Device>::new(), store, notify);
        });
    }

    fn device(store: StoreContext, id: &str) -> Device {
        store.store.with_untracked(|s| s.get::<Device>(id)).unwrap()
    }

    fn device_count(store: StoreContext) -> usize {
        store.store.with_untracked(|s| s.list::<Device>().len())
    }

    #[test]
    fn test_open_create_drafts_next_id() {
        with_device_vm(|vm, _, _| {
            vm.open_create();
            assert!(vm.open.get_untracked());
            assert!(!vm.is_edit());
            assert_eq!(vm.form.with_untracked(|d| d.id.clone()), "D006");
            assert_eq!(vm.title(), "Thêm thiết bị");
        });
    }

    #[test]
    fn test_duplicate_submit_keeps_dialog_open() {
        with_device_vm(|vm, store, notify| {
            let before = device_count(store);
            vm.open_create();
            let existing = device(store, "D001");
            vm.edit(|d| *d = existing);
            vm.submit();

            assert!(vm.open.get_untracked());
            assert!(!vm.busy.get_untracked());
            let toasts = notify.toasts();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].kind, ToastKind::Error);
            assert_eq!(device_count(store), before);
            assert_eq!(store.store.with_untracked(|s| s.version()), 0);
        });
    }

    #[test]
    fn test_invalid_edit_rejected_before_mutation() {
        with_device_vm(|vm, store, notify| {
            let original = device(store, "D002");
            vm.open_edit(Device {
                name: String::new(),
                ..original.clone()
            });
            vm.submit();

            assert!(vm.open.get_untracked());
            assert_eq!(notify.toasts()[0].kind, ToastKind::Error);
            assert_eq!(device(store, "D002"), original);
        });
    }

    #[test]
    fn test_confirm_delete_removes_record() {
        with_device_vm(|vm, store, notify| {
            vm.request_delete("D005".to_string());
            assert_eq!(vm.delete_message(), "Bạn có chắc muốn xóa thiết bị D005?");
            vm.confirm_delete();

            assert!(!vm.confirm_open.get_untracked());
            assert_eq!(vm.pending_delete.get_untracked(), None);
            assert_eq!(device_count(store), 4);
            assert_eq!(notify.toasts()[0].kind, ToastKind::Success);
        });
    }

    #[test]
    fn test_delete_with_disposed_store_reports_nothing() {
        with_device_vm(|vm, store, notify| {
            vm.request_delete("D001".to_string());
            store.store.dispose();
            vm.confirm_delete();

            assert!(!vm.confirm_open.get_untracked());
            assert!(notify.toasts().is_empty());
        });
    }
}
