//! User-facing reply texts.
//!
//! The bot speaks Russian; these strings are the product surface and are kept
//! verbatim. Code and logs stay in English.

pub const HELP: &str = "Привет! Я бот для генерации случайных музыкальных модуляций.\n\
Используй команду /modulate, чтобы получить случайную тональность и ступень.\n\
Используй команду /select_step, чтобы выбрать ступень и получать модуляции для неё.\n\
Используй команду /select_tonality, чтобы выбрать тональность и получать случайные ступени для неё.";

pub const SELECT_STEP_PROMPT: &str = "Введите ступень (например, 'V'), чтобы получать модуляции для неё.\n\
Используйте /cancel, чтобы выйти из режима выбора ступени.";

pub const STEP_FOLLOWUP: &str = "Используйте /next, чтобы получить ещё одну модуляцию для этой ступени.\n\
Используйте /cancel, чтобы выйти из режима выбора ступени.";

pub const INVALID_STEP: &str = "Некорректная ступень. Попробуйте ещё раз.";

pub const SELECT_STEP_FIRST: &str = "Сначала выберите ступень с помощью /select_step.";

pub const SELECT_TONALITY_PROMPT: &str = "Введите тональность (например, 'C-dur' или 'a-moll'), чтобы получать случайные ступени для неё.\n\
Используйте /cancel, чтобы выйти из режима выбора тональности.";

pub const TONALITY_FOLLOWUP: &str = "Используйте /next_tonality, чтобы получить ещё одну ступень для этой тональности.\n\
Используйте /cancel, чтобы выйти из режима выбора тональности.";

pub const INVALID_TONALITY: &str = "Некорректная тональность. Попробуйте ещё раз.";

pub const SELECT_TONALITY_FIRST: &str = "Сначала выберите тональность с помощью /select_tonality.";

pub const CANCELLED: &str = "Режим выбора ступени или тональности отменён. Возврат к абсолютному рандому.";

pub const GENERIC_FAILURE: &str = "Произошла ошибка. Попробуйте ещё раз.";

pub const GENERATION_FAILED: &str = "Произошла ошибка при генерации модуляции. Попробуйте ещё раз.";
