/// Трейт для плоской записи справочника или документа
///
/// Определяет идентификатор, метаданные для UI и правила обязательности полей.
/// Все записи адресуются строковым ID, ссылки на другие записи тоже строковые.
pub trait Record: Clone + std::fmt::Debug {
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &str;

    /// Установить ID (используется при подстановке сгенерированного кода)
    fn set_id(&mut self, id: String);

    /// Обязательные поля: пары (подпись для UI, текущее значение)
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Mã", self.id())]
    }

    /// Поля с датой в формате YYYY-MM-DD: пары (подпись, значение)
    fn date_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    // ============================================================================
    // Метаданные класса записи (статические данные)
    // ============================================================================

    /// Индекс сущности в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "devices")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Префикс генерируемого кода ("D" → "D006")
    fn id_prefix() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Подписи незаполненных обязательных полей
    fn missing_fields(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    /// Полное имя сущности (например, "a001_devices")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Денормализованное представление записи со ссылками, развёрнутыми
/// во вложенные объекты
pub trait FullView: Clone {
    type Flat: Record;

    /// Исходная плоская запись
    fn flat(&self) -> &Self::Flat;
}
