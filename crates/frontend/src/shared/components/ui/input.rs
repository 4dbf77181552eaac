use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "date", "number", "email"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Required attribute (показывает звёздочку у подписи)
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get()
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}

/// Число из текста поля ввода; пустая или незаконченная строка ("-", ".")
/// считается нулём
pub fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Новый текст поля, если значение модели разошлось с введённым текстом
fn resync_text(raw: &str, current: f64) -> Option<String> {
    (parse_number(raw) != current).then(|| current.to_string())
}

/// Поле для числа. Введённый текст хранится как есть, в модель уходит
/// разобранное значение. Текст заменяется только при внешнем изменении
/// значения (открыли другую запись), поэтому очистка поля или ввод "-"
/// не сбрасываются в "0".
#[component]
pub fn NumberInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<f64>,
    on_change: Callback<f64>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let raw = RwSignal::new(value.get_untracked().to_string());

    Effect::new(move |_| {
        let current = value.get();
        if let Some(text) = resync_text(&raw.get_untracked(), current) {
            raw.set(text);
        }
    });

    view! {
        <Input
            label=label
            input_type="number"
            value=raw
            disabled=disabled
            required=required
            on_input=Callback::new(move |text: String| {
                let number = parse_number(&text);
                raw.set(text);
                on_change.run(number);
            })
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_keeps_partial_input_at_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number(" 1500.5 "), 1500.5);
        assert_eq!(parse_number("-20"), -20.0);
    }

    #[test]
    fn test_partial_text_is_not_rewritten() {
        assert_eq!(resync_text("", 0.0), None);
        assert_eq!(resync_text("-", 0.0), None);
        assert_eq!(resync_text("1.50", 1.5), None);
        // открыта другая запись
        assert_eq!(resync_text("12", 35_000_000.0), Some("35000000".to_string()));
    }
}
