use serde::{Deserialize, Serialize};

/// 세션 전역 언어. 시작 시 영어.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            _ => None,
        }
    }

    /// 언어 토글 버튼 라벨
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Hindi => "हिं",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Ok,
    AppTitle,
    Tagline,
    Footer,
    TabVoice,
    TabAid,
    TabEmergency,
    AskQuestion,
    InputPlaceholder,
    SendText,
    Voice,
    Listening,
    LegalAdvice,
    NextSteps,
    ResponseEmergencyContacts,
    AidTitle,
    AidSubtitle,
    Address,
    Phone,
    Services,
    District,
    AllDistricts,
    LoadingCenters,
    NoCenters,
    EmergencyTitle,
    EmergencySubtitle,
    LoadingContacts,
    NoContacts,
    LoadFailed,
    RetryHint,
    ErrorTitle,
    OpProcessQuery,
    OpLoadCenters,
    OpLoadContacts,
    OpDial,
    ServiceOnline,
    ServiceOffline,
    ServiceChecking,
    WarnTitle,
    WarnCurrent,
    WarnRequired,
    WarnHint,
    ServiceLabel,
    CmdViews,
    CmdLanguage,
    CmdQuit,
    CmdSend,
    CmdVoice,
    CmdScroll,
    CmdSelect,
    CmdCall,
    CmdRetry,
    CmdDistrict,
    CmdHelp,
    LangEnglish,
    LangHindi,
    EditInput,
    HelpGlobal,
    HelpAssistant,
    HelpLists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    OperationFailed,
    Calling,
    AnsweredAt,
    DistrictFilter,
    LanguageChanged,
    CentersCount,
}

/// 키 → 영어/힌디어 문자열 변환 테이블
#[derive(Debug, Clone, Copy)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(self) -> Language {
        self.language
    }

    pub fn tr(self, key: TextKey) -> &'static str {
        text(key, self.language)
    }

    pub fn msg(self, key: MessageKey) -> &'static str {
        match (self.language, key) {
            (Language::English, MessageKey::OperationFailed) => {
                "{operation} failed.\nReason: {reason}\nPlease try again."
            }
            (Language::Hindi, MessageKey::OperationFailed) => {
                "{operation} विफल रहा।\nकारण: {reason}\nकृपया पुनः प्रयास करें।"
            }
            (Language::English, MessageKey::Calling) => "Calling {number}",
            (Language::Hindi, MessageKey::Calling) => "{number} पर कॉल कर रहे हैं",
            (Language::English, MessageKey::AnsweredAt) => "Answered at {time} [{language}]",
            (Language::Hindi, MessageKey::AnsweredAt) => "{time} पर उत्तर [{language}]",
            (Language::English, MessageKey::DistrictFilter) => "District: {district}",
            (Language::Hindi, MessageKey::DistrictFilter) => "जिला: {district}",
            (Language::English, MessageKey::LanguageChanged) => "Language: English",
            (Language::Hindi, MessageKey::LanguageChanged) => "भाषा: हिंदी",
            (Language::English, MessageKey::CentersCount) => "{count} centers",
            (Language::Hindi, MessageKey::CentersCount) => "{count} केंद्र",
        }
    }

    pub fn fmt(self, key: MessageKey, args: &[(&str, String)]) -> String {
        let mut out = self.msg(key).to_string();
        for (name, value) in args {
            let needle = format!("{{{}}}", name);
            out = out.replace(&needle, value);
        }
        out
    }
}

/// 순수 함수: UI 문자열 키와 언어로 리터럴을 고른다.
pub fn text(key: TextKey, language: Language) -> &'static str {
    match (language, key) {
        (_, TextKey::Ok) => "OK",
        (_, TextKey::AppTitle) => "🏛️ NyayaSathi",
        (Language::English, TextKey::Tagline) => {
            "Your trusted legal companion for justice and rights"
        }
        (Language::Hindi, TextKey::Tagline) => {
            "न्याय और अधिकारों के लिए आपका विश्वसनीय कानूनी साथी"
        }
        (Language::English, TextKey::Footer) => {
            "© 2025 Team Equinox. Built for social impact and justice accessibility."
        }
        (Language::Hindi, TextKey::Footer) => {
            "© 2025 टीम इक्विनॉक्स। सामाजिक प्रभाव और न्याय तक पहुंच के लिए निर्मित।"
        }
        (Language::English, TextKey::TabVoice) => "Voice Assistant",
        (Language::Hindi, TextKey::TabVoice) => "आवाज सहायक",
        (Language::English, TextKey::TabAid) => "Legal Aid",
        (Language::Hindi, TextKey::TabAid) => "कानूनी सहायता",
        (Language::English, TextKey::TabEmergency) => "Emergency",
        (Language::Hindi, TextKey::TabEmergency) => "आपातकाल",
        (Language::English, TextKey::AskQuestion) => "Ask Your Legal Question",
        (Language::Hindi, TextKey::AskQuestion) => "अपना कानूनी प्रश्न पूछें",
        (Language::English, TextKey::InputPlaceholder) => "Describe your legal issue...",
        (Language::Hindi, TextKey::InputPlaceholder) => "अपनी कानूनी समस्या बताएं...",
        (Language::English, TextKey::SendText) => "Send Text",
        (Language::Hindi, TextKey::SendText) => "टेक्स्ट भेजें",
        (Language::English, TextKey::Voice) => "Voice",
        (Language::Hindi, TextKey::Voice) => "आवाज",
        (Language::English, TextKey::Listening) => "Listening...",
        (Language::Hindi, TextKey::Listening) => "सुन रहे हैं...",
        (Language::English, TextKey::LegalAdvice) => "Legal Advice:",
        (Language::Hindi, TextKey::LegalAdvice) => "कानूनी सलाह:",
        (Language::English, TextKey::NextSteps) => "Next Steps:",
        (Language::Hindi, TextKey::NextSteps) => "अगले कदम:",
        (Language::English, TextKey::ResponseEmergencyContacts) => "Emergency Contacts:",
        (Language::Hindi, TextKey::ResponseEmergencyContacts) => "आपातकालीन संपर्क:",
        (Language::English, TextKey::AidTitle) => "Legal Aid Centers",
        (Language::Hindi, TextKey::AidTitle) => "कानूनी सहायता केंद्र",
        (Language::English, TextKey::AidSubtitle) => {
            "Find experienced legal professionals and aid centers near you"
        }
        (Language::Hindi, TextKey::AidSubtitle) => {
            "अपने नजदीक अनुभवी कानूनी पेशेवर और सहायता केंद्र खोजें"
        }
        (Language::English, TextKey::Address) => "Address:",
        (Language::Hindi, TextKey::Address) => "पता:",
        (Language::English, TextKey::Phone) => "Phone:",
        (Language::Hindi, TextKey::Phone) => "फोन:",
        (Language::English, TextKey::Services) => "Services:",
        (Language::Hindi, TextKey::Services) => "सेवाएं:",
        (Language::English, TextKey::District) => "District:",
        (Language::Hindi, TextKey::District) => "जिला:",
        (Language::English, TextKey::AllDistricts) => "All",
        (Language::Hindi, TextKey::AllDistricts) => "सभी",
        (Language::English, TextKey::LoadingCenters) => "Loading legal aid centers...",
        (Language::Hindi, TextKey::LoadingCenters) => "कानूनी सहायता केंद्र लोड हो रहे हैं...",
        (Language::English, TextKey::NoCenters) => "No legal aid centers found",
        (Language::Hindi, TextKey::NoCenters) => "कोई कानूनी सहायता केंद्र नहीं मिला",
        (Language::English, TextKey::EmergencyTitle) => "Emergency Contacts",
        (Language::Hindi, TextKey::EmergencyTitle) => "आपातकालीन संपर्क",
        (Language::English, TextKey::EmergencySubtitle) => {
            "Quick access to emergency helplines and immediate assistance"
        }
        (Language::Hindi, TextKey::EmergencySubtitle) => {
            "आपातकालीन हेल्पलाइन और तत्काल सहायता तक त्वरित पहुंच"
        }
        (Language::English, TextKey::LoadingContacts) => "Loading emergency contacts...",
        (Language::Hindi, TextKey::LoadingContacts) => "आपातकालीन संपर्क लोड हो रहे हैं...",
        (Language::English, TextKey::NoContacts) => "No emergency contacts found",
        (Language::Hindi, TextKey::NoContacts) => "कोई आपातकालीन संपर्क नहीं मिला",
        (Language::English, TextKey::LoadFailed) => "Could not load this list.",
        (Language::Hindi, TextKey::LoadFailed) => "यह सूची लोड नहीं हो सकी।",
        (Language::English, TextKey::RetryHint) => "Press r to retry",
        (Language::Hindi, TextKey::RetryHint) => "पुनः प्रयास के लिए r दबाएं",
        (Language::English, TextKey::ErrorTitle) => "Error",
        (Language::Hindi, TextKey::ErrorTitle) => "त्रुटि",
        (Language::English, TextKey::OpProcessQuery) => "Processing query",
        (Language::Hindi, TextKey::OpProcessQuery) => "प्रश्न संसाधित करना",
        (Language::English, TextKey::OpLoadCenters) => "Loading legal aid centers",
        (Language::Hindi, TextKey::OpLoadCenters) => "कानूनी सहायता केंद्र लोड करना",
        (Language::English, TextKey::OpLoadContacts) => "Loading emergency contacts",
        (Language::Hindi, TextKey::OpLoadContacts) => "आपातकालीन संपर्क लोड करना",
        (Language::English, TextKey::OpDial) => "Placing call",
        (Language::Hindi, TextKey::OpDial) => "कॉल करना",
        (Language::English, TextKey::ServiceOnline) => "online",
        (Language::Hindi, TextKey::ServiceOnline) => "ऑनलाइन",
        (Language::English, TextKey::ServiceOffline) => "offline",
        (Language::Hindi, TextKey::ServiceOffline) => "ऑफलाइन",
        (Language::English, TextKey::ServiceChecking) => "checking",
        (Language::Hindi, TextKey::ServiceChecking) => "जांच रहे हैं",
        (Language::English, TextKey::WarnTitle) => "Terminal Too Small",
        (Language::Hindi, TextKey::WarnTitle) => "टर्मिनल बहुत छोटा है",
        (Language::English, TextKey::WarnCurrent) => "Current:",
        (Language::Hindi, TextKey::WarnCurrent) => "वर्तमान:",
        (Language::English, TextKey::WarnRequired) => "Required:",
        (Language::Hindi, TextKey::WarnRequired) => "आवश्यक:",
        (Language::English, TextKey::WarnHint) => "Please resize your terminal",
        (Language::Hindi, TextKey::WarnHint) => "कृपया टर्मिनल का आकार बढ़ाएं",
        (Language::English, TextKey::ServiceLabel) => "Service",
        (Language::Hindi, TextKey::ServiceLabel) => "सेवा",
        (Language::English, TextKey::CmdViews) => "Views",
        (Language::Hindi, TextKey::CmdViews) => "दृश्य",
        (Language::English, TextKey::CmdLanguage) => "Language",
        (Language::Hindi, TextKey::CmdLanguage) => "भाषा",
        (Language::English, TextKey::CmdQuit) => "Quit",
        (Language::Hindi, TextKey::CmdQuit) => "बाहर",
        (Language::English, TextKey::CmdSend) => "Send",
        (Language::Hindi, TextKey::CmdSend) => "भेजें",
        (Language::English, TextKey::CmdVoice) => "Voice",
        (Language::Hindi, TextKey::CmdVoice) => "आवाज",
        (Language::English, TextKey::CmdScroll) => "Scroll",
        (Language::Hindi, TextKey::CmdScroll) => "स्क्रॉल",
        (Language::English, TextKey::CmdSelect) => "Select",
        (Language::Hindi, TextKey::CmdSelect) => "चुनें",
        (Language::English, TextKey::CmdCall) => "Call",
        (Language::Hindi, TextKey::CmdCall) => "कॉल",
        (Language::English, TextKey::CmdRetry) => "Retry",
        (Language::Hindi, TextKey::CmdRetry) => "पुनः प्रयास",
        (Language::English, TextKey::CmdDistrict) => "District",
        (Language::Hindi, TextKey::CmdDistrict) => "जिला",
        (Language::English, TextKey::CmdHelp) => "Help",
        (Language::Hindi, TextKey::CmdHelp) => "सहायता",
        (_, TextKey::LangEnglish) => "English",
        (_, TextKey::LangHindi) => "हिंदी",
        (Language::English, TextKey::EditInput) => "Edit question",
        (Language::Hindi, TextKey::EditInput) => "प्रश्न संपादित करें",
        (Language::English, TextKey::HelpGlobal) => "General",
        (Language::Hindi, TextKey::HelpGlobal) => "सामान्य",
        (Language::English, TextKey::HelpAssistant) => "Voice Assistant",
        (Language::Hindi, TextKey::HelpAssistant) => "आवाज सहायक",
        (Language::English, TextKey::HelpLists) => "Legal Aid / Emergency",
        (Language::Hindi, TextKey::HelpLists) => "कानूनी सहायता / आपातकाल",
    }
}

/// 활성 언어 보관소. 앱 전체에 하나만 존재하며 세션이 끝나면 버려진다.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalizationProvider {
    current: Language,
}

impl LocalizationProvider {
    pub fn new(language: Language) -> Self {
        Self { current: language }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn set(&mut self, language: Language) {
        self.current = language;
    }

    pub fn toggle(&mut self) {
        self.current = self.current.other();
    }

    pub fn i18n(&self) -> I18n {
        I18n::new(self.current)
    }
}
