//! Модальные формы: редактирование записи и подтверждение удаления

use leptos::prelude::*;
use thaw::*;

/// Диалог с произвольными полями и кнопками «Lưu» / «Hủy»
///
/// Пока `busy` истинно, кнопка отправки показывает загрузку, а закрыть
/// диалог нельзя. `after_form` выводится под формой: Enter в его полях
/// не отправляет запись.
#[component]
pub fn FormDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] submit_label: Option<String>,
    #[prop(optional, into)] after_form: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let submit_label = submit_label.unwrap_or_else(|| "Lưu".to_string());

    view! {
        <Dialog open=open mask_closeable=false>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <form
                            class="form-dialog__fields"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        >
                            {children()}
                        </form>
                        {after_form.as_ref().map(|extra| extra.run())}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                            disabled=move || busy.get()
                        >
                            "Hủy"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit.run(())
                            disabled=move || busy.get()
                            loading=move || busy.get()
                        >
                            {move || {
                                if busy.get() {
                                    "Đang xử lý...".to_string()
                                } else {
                                    submit_label.clone()
                                }
                            }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Подтверждение удаления записи
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Xác nhận xóa"</DialogTitle>
                    <DialogContent>
                        <p>{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                        >
                            "Hủy"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            "Xóa"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
