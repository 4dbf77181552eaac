use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Вариант бейджа для статуса документа или состояния устройства
pub fn status_variant(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "đã bảo trì" | "đã sửa chữa" | "tốt" | "đã thanh toán" | "còn hạn" => "success",
        "chưa bảo trì" | "chưa sửa chữa" | "bảo trì" | "chưa thanh toán" => "warning",
        "hỏng" | "sửa chữa" | "hết hạn" => "error",
        _ => "neutral",
    }
}

/// Бейдж статуса: текст статуса, цвет по [`status_variant`]
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let variant = status_variant(&status);

    view! {
        <Badge variant=variant>{status}</Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("đã bảo trì"), "success");
        assert_eq!(status_variant("đã sửa chữa"), "success");
        assert_eq!(status_variant("tốt"), "success");
        assert_eq!(status_variant("chưa bảo trì"), "warning");
        assert_eq!(status_variant("chưa sửa chữa"), "warning");
        assert_eq!(status_variant("bảo trì"), "warning");
        assert_eq!(status_variant("hỏng"), "error");
        assert_eq!(status_variant("sửa chữa"), "error");
        assert_eq!(status_variant("hết hạn"), "error");
        assert_eq!(status_variant("đã thanh toán"), "success");
        assert_eq!(status_variant("Đang sử dụng"), "neutral");
    }
}
