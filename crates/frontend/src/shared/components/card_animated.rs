//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `style/main.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```rust,ignore
//! // Без задержки
//! <CardAnimated>
//!     <p>"Контент"</p>
//! </CardAnimated>
//!
//! // Каскадная задержка для сетки карточек
//! <CardAnimated delay_ms=0 class="summary-card">...</CardAnimated>
//! <CardAnimated delay_ms=80 class="summary-card">...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
///
/// # Props
/// - `delay_ms` — задержка анимации в мс (по умолчанию `0`).
/// - `class`    — классы внутреннего контейнера (отступы, подсветка состояния).
/// - `style`    — дополнительные inline-стили карточки.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Классы внутреннего контейнера (реактивные).
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Дополнительные inline-стили (добавляются после стилей анимации).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            <div class=move || format!("card__content {}", class.get().unwrap_or_default())>
                {children()}
            </div>
        </Card>
    }
}
