//! Typed translations for the Comète interface.
//!
//! Every user-visible string is addressed by a [`MessageKey`]. Each language
//! dictionary is an exhaustive `match`, so adding a key without translating
//! it in all three languages does not compile. Placeholders use the
//! `{name}` syntax and are filled by [`Translator::fmt`].
//!
//! ```
//! use comete::i18n::{Language, MessageKey, Translator};
//!
//! let t = Translator::new(Language::En);
//! assert_eq!(t.t(MessageKey::NavSettings), "Settings");
//! assert_eq!(t.fmt(MessageKey::AppearanceFontSize, &[("size", "18")]), "Text size: 18px");
//! ```

use crate::error::{I18nError, UnsupportedLanguage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface language. The set is closed: anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Fr, Language::En, Language::Es];

    /// ISO 639-1 code, as stored in the profile.
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Name of the language in that language, for the selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
            Language::Es => "Español",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}

macro_rules! message_keys {
    ($($variant:ident => $code:literal,)*) => {
        /// Identifier of a translatable message.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant,)*
        }

        impl MessageKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)*];

            /// Dotted identifier used in logs and diagnostics (e.g. `hero.subtitle`).
            pub fn code(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $code,)*
                }
            }
        }
    };
}

message_keys! {
    AppTitle => "app.title",
    AppTagline => "app.tagline",
    NavHome => "nav.home",
    NavPeriods => "nav.periods",
    NavQuiz => "nav.quiz",
    NavSettings => "nav.settings",
    HeroTitle => "hero.title",
    HeroSubtitle => "hero.subtitle",
    HeroButton => "hero.button",
    CtaTitle => "cta.title",
    CtaDescription => "cta.description",
    CtaButton => "cta.button",
    PeriodsTitle => "periods.title",
    PeriodsSubtitle => "periods.subtitle",
    PeriodExplore => "periods.explore",
    PeriodKeyEvents => "periods.key_events",
    PeriodBack => "periods.back",
    PeriodSpan => "periods.span",
    PeriodNotFound => "periods.not_found",
    QuizTitle => "quiz.title",
    QuizQuestion => "quiz.question",
    QuizCorrect => "quiz.correct",
    QuizWrong => "quiz.wrong",
    QuizNext => "quiz.next",
    QuizScore => "quiz.score",
    SettingsTitle => "settings.title",
    SettingsSubtitle => "settings.subtitle",
    TabProfile => "settings.tab.profile",
    TabAppearance => "settings.tab.appearance",
    TabNotifications => "settings.tab.notifications",
    TabPrivacy => "settings.tab.privacy",
    ProfileName => "profile.name",
    ProfileEmail => "profile.email",
    ProfileBio => "profile.bio",
    ProfileLanguage => "profile.language",
    ProfileFavoriteSubjects => "profile.favorite_subjects",
    ProfileSubmit => "profile.submit",
    ProfileSavedTitle => "profile.saved.title",
    ProfileSavedDescription => "profile.saved.description",
    ProfileSaveFailedTitle => "profile.save_failed.title",
    ProfileSaveFailedDescription => "profile.save_failed.description",
    AvatarChange => "avatar.change",
    AppearanceTheme => "appearance.theme",
    ThemeLight => "theme.light",
    ThemeDark => "theme.dark",
    ThemeSystem => "theme.system",
    AppearanceFontSize => "appearance.font_size",
    AppearanceShowSources => "appearance.show_sources",
    AppearanceShowSourcesHint => "appearance.show_sources.hint",
    AppearanceAutoSave => "appearance.auto_save",
    AppearanceAutoSaveHint => "appearance.auto_save.hint",
    AppearanceReset => "appearance.reset",
    NotificationsEmail => "notifications.email",
    NotificationsEmailHint => "notifications.email.hint",
    NotificationsPush => "notifications.push",
    NotificationsPushHint => "notifications.push.hint",
    NotificationEnabledTitle => "notifications.enabled.title",
    NotificationDisabledTitle => "notifications.disabled.title",
    NotificationChangedDescription => "notifications.changed.description",
    PrivacyExport => "privacy.export",
    PrivacyExportHint => "privacy.export.hint",
    PrivacyExportDoneTitle => "privacy.export.done.title",
    PrivacyExportDoneDescription => "privacy.export.done.description",
    PrivacyExportFailedTitle => "privacy.export.failed.title",
    PrivacyExportFailedDescription => "privacy.export.failed.description",
    PrivacyDeleteAccount => "privacy.delete_account",
    PrivacyDeleteHint => "privacy.delete_account.hint",
    FeatureUnavailableTitle => "feature.unavailable.title",
    FeatureUnavailableDescription => "feature.unavailable.description",
    FooterRights => "footer.rights",
}

fn french(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        AppTitle => "Comète",
        AppTagline => "L'histoire et les sciences à portée de main",
        NavHome => "Accueil",
        NavPeriods => "Périodes",
        NavQuiz => "Quiz",
        NavSettings => "Paramètres",
        HeroTitle => "Voyagez à travers le temps",
        HeroSubtitle => "Explorez les grandes périodes de l'histoire, de la Préhistoire à nos jours.",
        HeroButton => "Commencer l'exploration",
        CtaTitle => "Prêt à tester vos connaissances ?",
        CtaDescription => "Relevez le défi du quiz et situez chaque événement dans son époque.",
        CtaButton => "Lancer le quiz",
        PeriodsTitle => "Les grandes périodes",
        PeriodsSubtitle => "Choisissez une période pour découvrir ses événements marquants.",
        PeriodExplore => "Explorer",
        PeriodKeyEvents => "Événements clés",
        PeriodBack => "Retour aux périodes",
        PeriodSpan => "De {start} à {end}",
        PeriodNotFound => "Cette période est introuvable.",
        QuizTitle => "Quelle époque ?",
        QuizQuestion => "À quelle période appartient : « {event} » ?",
        QuizCorrect => "Bonne réponse !",
        QuizWrong => "Raté ! La bonne réponse était : {answer}.",
        QuizNext => "Question suivante",
        QuizScore => "Score : {score} / {rounds}",
        SettingsTitle => "Paramètres du compte",
        SettingsSubtitle => "Gérez votre profil et vos préférences.",
        TabProfile => "Profil",
        TabAppearance => "Apparence",
        TabNotifications => "Notifications",
        TabPrivacy => "Confidentialité",
        ProfileName => "Nom",
        ProfileEmail => "Adresse e-mail",
        ProfileBio => "Biographie",
        ProfileLanguage => "Langue",
        ProfileFavoriteSubjects => "Matières favorites",
        ProfileSubmit => "Enregistrer les modifications",
        ProfileSavedTitle => "Profil mis à jour",
        ProfileSavedDescription => "Vos informations ont été enregistrées avec succès.",
        ProfileSaveFailedTitle => "Échec de l'enregistrement",
        ProfileSaveFailedDescription => "Impossible d'enregistrer le profil : {error}",
        AvatarChange => "Changer d'avatar",
        AppearanceTheme => "Thème",
        ThemeLight => "Clair",
        ThemeDark => "Sombre",
        ThemeSystem => "Système",
        AppearanceFontSize => "Taille du texte : {size}px",
        AppearanceShowSources => "Afficher les sources",
        AppearanceShowSourcesHint => "Affiche les références sous chaque contenu historique.",
        AppearanceAutoSave => "Sauvegarde automatique",
        AppearanceAutoSaveHint => "Enregistre votre progression pendant la lecture.",
        AppearanceReset => "Rétablir l'apparence par défaut",
        NotificationsEmail => "Notifications par e-mail",
        NotificationsEmailHint => "Recevez les nouveautés et les nouveaux quiz par e-mail.",
        NotificationsPush => "Notifications push",
        NotificationsPushHint => "Recevez des rappels directement sur votre appareil.",
        NotificationEnabledTitle => "{channel} : activées",
        NotificationDisabledTitle => "{channel} : désactivées",
        NotificationChangedDescription => "Vos préférences de notification ont été mises à jour.",
        PrivacyExport => "Télécharger mes données",
        PrivacyExportHint => "Exporte votre profil et vos préférences au format JSON.",
        PrivacyExportDoneTitle => "Export terminé",
        PrivacyExportDoneDescription => "Vos données ont été enregistrées dans {path}.",
        PrivacyExportFailedTitle => "Échec de l'export",
        PrivacyExportFailedDescription => "Impossible d'exporter vos données : {error}",
        PrivacyDeleteAccount => "Supprimer mon compte",
        PrivacyDeleteHint => "Cette action est définitive.",
        FeatureUnavailableTitle => "Fonctionnalité à venir",
        FeatureUnavailableDescription => "Cette fonctionnalité n'est pas encore disponible.",
        FooterRights => "© {year} Comète. Tous droits réservés.",
    }
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        AppTitle => "Comète",
        AppTagline => "History and science at your fingertips",
        NavHome => "Home",
        NavPeriods => "Periods",
        NavQuiz => "Quiz",
        NavSettings => "Settings",
        HeroTitle => "Travel through time",
        HeroSubtitle => "Explore the great periods of history, from Prehistory to the present day.",
        HeroButton => "Start exploring",
        CtaTitle => "Ready to test your knowledge?",
        CtaDescription => "Take the quiz and place each event in its era.",
        CtaButton => "Start the quiz",
        PeriodsTitle => "The great periods",
        PeriodsSubtitle => "Pick a period to discover its defining events.",
        PeriodExplore => "Explore",
        PeriodKeyEvents => "Key events",
        PeriodBack => "Back to periods",
        PeriodSpan => "From {start} to {end}",
        PeriodNotFound => "This period could not be found.",
        QuizTitle => "Which era?",
        QuizQuestion => "Which period does this belong to: \"{event}\"?",
        QuizCorrect => "Correct!",
        QuizWrong => "Missed! The right answer was: {answer}.",
        QuizNext => "Next question",
        QuizScore => "Score: {score} / {rounds}",
        SettingsTitle => "Account settings",
        SettingsSubtitle => "Manage your profile and preferences.",
        TabProfile => "Profile",
        TabAppearance => "Appearance",
        TabNotifications => "Notifications",
        TabPrivacy => "Privacy",
        ProfileName => "Name",
        ProfileEmail => "Email address",
        ProfileBio => "Bio",
        ProfileLanguage => "Language",
        ProfileFavoriteSubjects => "Favourite subjects",
        ProfileSubmit => "Save changes",
        ProfileSavedTitle => "Profile updated",
        ProfileSavedDescription => "Your information has been saved successfully.",
        ProfileSaveFailedTitle => "Save failed",
        ProfileSaveFailedDescription => "Could not save the profile: {error}",
        AvatarChange => "Change avatar",
        AppearanceTheme => "Theme",
        ThemeLight => "Light",
        ThemeDark => "Dark",
        ThemeSystem => "System",
        AppearanceFontSize => "Text size: {size}px",
        AppearanceShowSources => "Show sources",
        AppearanceShowSourcesHint => "Displays references below each historical entry.",
        AppearanceAutoSave => "Auto-save",
        AppearanceAutoSaveHint => "Saves your progress while you read.",
        AppearanceReset => "Restore default appearance",
        NotificationsEmail => "Email notifications",
        NotificationsEmailHint => "Get news and new quizzes by email.",
        NotificationsPush => "Push notifications",
        NotificationsPushHint => "Get reminders directly on your device.",
        NotificationEnabledTitle => "{channel}: enabled",
        NotificationDisabledTitle => "{channel}: disabled",
        NotificationChangedDescription => "Your notification preferences have been updated.",
        PrivacyExport => "Download my data",
        PrivacyExportHint => "Exports your profile and preferences as JSON.",
        PrivacyExportDoneTitle => "Export complete",
        PrivacyExportDoneDescription => "Your data was saved to {path}.",
        PrivacyExportFailedTitle => "Export failed",
        PrivacyExportFailedDescription => "Could not export your data: {error}",
        PrivacyDeleteAccount => "Delete my account",
        PrivacyDeleteHint => "This action cannot be undone.",
        FeatureUnavailableTitle => "Coming soon",
        FeatureUnavailableDescription => "This feature is not available yet.",
        FooterRights => "© {year} Comète. All rights reserved.",
    }
}

fn spanish(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        AppTitle => "Comète",
        AppTagline => "La historia y la ciencia a tu alcance",
        NavHome => "Inicio",
        NavPeriods => "Periodos",
        NavQuiz => "Quiz",
        NavSettings => "Ajustes",
        HeroTitle => "Viaja a través del tiempo",
        HeroSubtitle => "Explora los grandes periodos de la historia, desde la Prehistoria hasta hoy.",
        HeroButton => "Empezar a explorar",
        CtaTitle => "¿Listo para poner a prueba tus conocimientos?",
        CtaDescription => "Haz el quiz y sitúa cada acontecimiento en su época.",
        CtaButton => "Iniciar el quiz",
        PeriodsTitle => "Los grandes periodos",
        PeriodsSubtitle => "Elige un periodo para descubrir sus acontecimientos clave.",
        PeriodExplore => "Explorar",
        PeriodKeyEvents => "Acontecimientos clave",
        PeriodBack => "Volver a los periodos",
        PeriodSpan => "De {start} a {end}",
        PeriodNotFound => "No se ha encontrado este periodo.",
        QuizTitle => "¿Qué época?",
        QuizQuestion => "¿A qué periodo pertenece: «{event}»?",
        QuizCorrect => "¡Correcto!",
        QuizWrong => "¡Fallaste! La respuesta correcta era: {answer}.",
        QuizNext => "Siguiente pregunta",
        QuizScore => "Puntuación: {score} / {rounds}",
        SettingsTitle => "Ajustes de la cuenta",
        SettingsSubtitle => "Gestiona tu perfil y tus preferencias.",
        TabProfile => "Perfil",
        TabAppearance => "Apariencia",
        TabNotifications => "Notificaciones",
        TabPrivacy => "Privacidad",
        ProfileName => "Nombre",
        ProfileEmail => "Correo electrónico",
        ProfileBio => "Biografía",
        ProfileLanguage => "Idioma",
        ProfileFavoriteSubjects => "Materias favoritas",
        ProfileSubmit => "Guardar cambios",
        ProfileSavedTitle => "Perfil actualizado",
        ProfileSavedDescription => "Tu información se ha guardado correctamente.",
        ProfileSaveFailedTitle => "Error al guardar",
        ProfileSaveFailedDescription => "No se pudo guardar el perfil: {error}",
        AvatarChange => "Cambiar avatar",
        AppearanceTheme => "Tema",
        ThemeLight => "Claro",
        ThemeDark => "Oscuro",
        ThemeSystem => "Sistema",
        AppearanceFontSize => "Tamaño del texto: {size}px",
        AppearanceShowSources => "Mostrar fuentes",
        AppearanceShowSourcesHint => "Muestra las referencias bajo cada contenido histórico.",
        AppearanceAutoSave => "Guardado automático",
        AppearanceAutoSaveHint => "Guarda tu progreso mientras lees.",
        AppearanceReset => "Restablecer la apariencia",
        NotificationsEmail => "Notificaciones por correo",
        NotificationsEmailHint => "Recibe novedades y nuevos quiz por correo.",
        NotificationsPush => "Notificaciones push",
        NotificationsPushHint => "Recibe recordatorios directamente en tu dispositivo.",
        NotificationEnabledTitle => "{channel}: activadas",
        NotificationDisabledTitle => "{channel}: desactivadas",
        NotificationChangedDescription => "Tus preferencias de notificación se han actualizado.",
        PrivacyExport => "Descargar mis datos",
        PrivacyExportHint => "Exporta tu perfil y tus preferencias en formato JSON.",
        PrivacyExportDoneTitle => "Exportación completada",
        PrivacyExportDoneDescription => "Tus datos se han guardado en {path}.",
        PrivacyExportFailedTitle => "Error en la exportación",
        PrivacyExportFailedDescription => "No se pudieron exportar tus datos: {error}",
        PrivacyDeleteAccount => "Eliminar mi cuenta",
        PrivacyDeleteHint => "Esta acción es irreversible.",
        FeatureUnavailableTitle => "Próximamente",
        FeatureUnavailableDescription => "Esta función aún no está disponible.",
        FooterRights => "© {year} Comète. Todos los derechos reservados.",
    }
}

/// Resolves message keys against one language's dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the raw message for `key`, placeholders included.
    pub fn t(&self, key: MessageKey) -> &'static str {
        match self.language {
            Language::Fr => french(key),
            Language::En => english(key),
            Language::Es => spanish(key),
        }
    }

    /// Returns the message for `key` with each `{name}` replaced by its value.
    ///
    /// Placeholders without a matching argument are left as-is.
    /// Values are inserted verbatim: braces inside a value are not expanded.
    pub fn fmt(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let template = self.t(key);
        let mut message = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            message.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                rest = &rest[open..];
                break;
            };
            let name = &after[..close];
            match args.iter().find(|(arg, _)| *arg == name) {
                Some((_, value)) => message.push_str(value),
                None => message.push_str(&rest[open..open + close + 2]),
            }
            rest = &after[close + 1..];
        }
        message.push_str(rest);
        message
    }
}

/// Extracts the sorted placeholder names of a message.
fn placeholders(message: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = message;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                names.push(after[..close].to_string());
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    names.sort();
    names
}

/// Checks every dictionary: no empty message, and the same placeholders as French.
///
/// Called once at startup; a failure means a translation was edited badly.
pub fn validate() -> Result<(), Vec<I18nError>> {
    let reference = Translator::new(Language::Fr);
    let mut errors = Vec::new();

    for &key in MessageKey::ALL {
        let expected = placeholders(reference.t(key));
        for language in Language::ALL {
            let message = Translator::new(language).t(key);
            if message.trim().is_empty() {
                errors.push(I18nError::EmptyMessage {
                    key: key.code(),
                    language: language.code(),
                });
                continue;
            }
            let found = placeholders(message);
            if found != expected {
                errors.push(I18nError::PlaceholderMismatch {
                    key: key.code(),
                    language: language.code(),
                    expected: expected.clone(),
                    found,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionaries_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_language_codes_parse() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert!("de".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_observed_keys_keep_their_codes() {
        assert_eq!(MessageKey::AppTitle.code(), "app.title");
        assert_eq!(MessageKey::FooterRights.code(), "footer.rights");
        assert_eq!(MessageKey::HeroSubtitle.code(), "hero.subtitle");
        assert_eq!(MessageKey::CtaTitle.code(), "cta.title");
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = MessageKey::ALL.iter().map(|k| k.code()).collect();
        let total = codes.len();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_fmt_replaces_placeholders() {
        let t = Translator::new(Language::Fr);
        assert_eq!(
            t.fmt(MessageKey::QuizScore, &[("score", "3"), ("rounds", "5")]),
            "Score : 3 / 5"
        );
        // Unknown arguments are ignored, missing ones stay visible
        assert_eq!(
            t.fmt(MessageKey::QuizScore, &[("score", "1"), ("other", "x")]),
            "Score : 1 / {rounds}"
        );
    }

    #[test]
    fn test_fmt_does_not_expand_values() {
        let t = Translator::new(Language::Fr);
        assert_eq!(
            t.fmt(MessageKey::QuizScore, &[("score", "{rounds}"), ("rounds", "5")]),
            "Score : {rounds} / 5"
        );
        assert_eq!(
            t.fmt(MessageKey::QuizQuestion, &[("event", "{")]),
            Translator::new(Language::Fr).t(MessageKey::QuizQuestion).replace("{event}", "{")
        );
    }

    #[test]
    fn test_placeholder_extraction() {
        assert_eq!(placeholders("a {x} b {a}"), vec!["a".to_string(), "x".to_string()]);
        assert!(placeholders("no braces").is_empty());
        assert!(placeholders("dangling {brace").is_empty());
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
        assert!(serde_json::from_str::<Language>("\"it\"").is_err());
    }
}
