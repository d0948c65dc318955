// ============================================
// Config - Конфигурация демки
// ============================================
// Один рендер-цикл с флагами вместо параллельных путей кода:
// тени и свободную камеру можно выключить по отдельности.

use serde::{Deserialize, Serialize};

/// Пути к моделям сцены
pub const SUN_MODEL: &str = "models/sun/scene.gltf";
pub const EARTH_MODEL: &str = "models/earth/scene.gltf";
pub const MOON_MODEL: &str = "models/moon/scene.gltf";

/// Файл конфигурации рядом с бинарём
pub const CONFIG_FILE: &str = "orrery.json";

/// Настройки демки
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Начальный размер окна
    pub window_width: u32,
    pub window_height: u32,

    /// Сторона квадратной грани кубической карты теней
    pub shadow_resolution: u32,

    /// Выключенные тени пропускают depth-проход целиком
    pub enable_shadows: bool,

    /// false — камера прибита к стартовой позе, ввод игнорируется
    pub free_camera: bool,

    /// Чувствительность мыши (градусы на пиксель)
    pub mouse_sensitivity: f32,

    /// Скорость перемещения камеры (единиц в секунду)
    pub move_speed: f32,

    /// Множитель скорости орбитального времени
    pub time_scale: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_width: 1366,
            window_height: 768,
            shadow_resolution: 1024,
            enable_shadows: true,
            free_camera: true,
            mouse_sensitivity: 0.1,
            move_speed: 4.0,
            time_scale: 1.0,
        }
    }
}

impl DemoConfig {
    /// Загрузить конфиг; отсутствие или мусор в файле — не ошибка
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<Self>(&text) {
                Ok(config) => config.sanitized(),
                Err(e) => {
                    log::warn!("config '{}' is not valid JSON ({}), using defaults", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config at '{}', using defaults", path);
                Self::default()
            }
        }
    }

    /// Подрезать заведомо нерабочие значения
    fn sanitized(mut self) -> Self {
        if self.shadow_resolution == 0 {
            log::warn!("shadow_resolution 0 is invalid, using 1024");
            self.shadow_resolution = 1024;
        }
        if self.time_scale <= 0.0 {
            log::warn!("time_scale {} is invalid, using 1.0", self.time_scale);
            self.time_scale = 1.0;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.shadow_resolution, 1024);
        assert!(config.enable_shadows);
        assert!(config.free_camera);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DemoConfig =
            serde_json::from_str(r#"{ "enable_shadows": false }"#).unwrap();
        assert!(!config.enable_shadows);
        assert_eq!(config.shadow_resolution, 1024);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = DemoConfig::load_from("no_such_config_here.json");
        assert_eq!(config.window_width, DemoConfig::default().window_width);
    }

    #[test]
    fn test_sanitize_rejects_zero_resolution() {
        let config: DemoConfig =
            serde_json::from_str(r#"{ "shadow_resolution": 0 }"#).unwrap();
        assert_eq!(config.sanitized().shadow_resolution, 1024);
    }
}
