use std::collections::HashMap;

const FALLBACK_LANG: &str = "en-US";

// Simple in-memory translations
#[derive(Default)]
pub struct Translations {
    strings: HashMap<&'static str, &'static str>,
}

impl Translations {
    fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            strings: pairs.iter().copied().collect(),
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key).copied()
    }
}

pub struct Localizations {
    translations: HashMap<&'static str, Translations>,
    current_lang: &'static str,
}

impl Localizations {
    pub fn new() -> Self {
        let lang = std::env::var("LANG").unwrap_or_default();
        Self::for_lang(&lang)
    }

    pub fn for_lang(lang: &str) -> Self {
        let mut translations = HashMap::new();

        translations.insert(
            "en-US",
            Translations::from_pairs(&[
                ("app-title", "YouTube Downloader"),
                ("source-label", "URL / search term (yt only):"),
                ("source-placeholder", "Video URL or search term"),
                ("filename-placeholder", "File name (optional)"),
                ("format-placeholder", "File type (e.g., mp3, optional)"),
                ("audio-only", "Download Audio Only"),
                ("download-button", "Download"),
                ("ok-button", "OK"),
                ("choose-folder", "Select Download Folder"),
                ("status-downloading", "Downloading..."),
                ("title-success", "Success"),
                ("title-error", "Error"),
                ("error-no-url", "Please enter a video URL."),
                ("error-occurred", "An error occurred:"),
                ("download-completed", "Download completed!"),
                ("label-filename", "Filename:"),
                ("label-format", "Format:"),
            ]),
        );

        translations.insert(
            "es-ES",
            Translations::from_pairs(&[
                ("app-title", "Descargador de YouTube"),
                ("source-label", "URL / término de búsqueda (solo yt):"),
                ("source-placeholder", "URL del video o término de búsqueda"),
                ("filename-placeholder", "Nombre del archivo (opcional)"),
                ("format-placeholder", "Tipo de archivo (ej. mp3, opcional)"),
                ("audio-only", "Descargar solo audio"),
                ("download-button", "Descargar"),
                ("ok-button", "Aceptar"),
                ("choose-folder", "Seleccione la carpeta de descarga"),
                ("status-downloading", "Descargando..."),
                ("title-success", "Éxito"),
                ("title-error", "Error"),
                ("error-no-url", "Por favor ingrese la URL del video."),
                ("error-occurred", "Ocurrió un error:"),
                ("download-completed", "¡Descarga completada!"),
                ("label-filename", "Nombre:"),
                ("label-format", "Formato:"),
            ]),
        );

        let current_lang = if lang.starts_with("es") { "es-ES" } else { FALLBACK_LANG };

        Self {
            translations,
            current_lang,
        }
    }

    /// Looks `key` up in the current language, then in English, then
    /// returns the key itself.
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(self.current_lang)
            .and_then(|t| t.lookup(key))
            .or_else(|| self.translations.get(FALLBACK_LANG).and_then(|t| t.lookup(key)))
            .unwrap_or(key)
            .to_string()
    }

    pub fn current_lang(&self) -> &str {
        self.current_lang
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_is_picked_from_lang() {
        let l = Localizations::for_lang("es_MX.UTF-8");
        assert_eq!(l.current_lang(), "es-ES");
        assert_eq!(l.get("download-button"), "Descargar");
    }

    #[test]
    fn unknown_lang_falls_back_to_english() {
        let l = Localizations::for_lang("de_DE.UTF-8");
        assert_eq!(l.current_lang(), "en-US");
        assert_eq!(l.get("error-no-url"), "Please enter a video URL.");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let l = Localizations::for_lang("");
        assert_eq!(l.get("no-such-key"), "no-such-key");
    }
}
