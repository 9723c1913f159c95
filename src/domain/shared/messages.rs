use serde::Deserialize;

/// Language used for status lines shown to the user
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Localized status messages for every flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub design_creating: &'static str,
    pub design_created: &'static str,
    pub enroll_creating: &'static str,
    pub enroll_created: &'static str,
    pub synthesizing: &'static str,
    pub synthesized: &'static str,
    pub missing_audio_file: &'static str,
    pub request_failed: &'static str,
}

const EN: Messages = Messages {
    design_creating: "Generating voice...",
    design_created: "Voice generated.",
    enroll_creating: "Uploading audio and creating voice...",
    enroll_created: "Voice created.",
    synthesizing: "Synthesizing...",
    synthesized: "Synthesis complete.",
    missing_audio_file: "Please select an audio file first.",
    request_failed: "Request failed",
};

const ZH: Messages = Messages {
    design_creating: "正在生成音色...",
    design_created: "音色已生成。",
    enroll_creating: "正在上传并创建音色...",
    enroll_created: "音色已创建。",
    synthesizing: "正在合成...",
    synthesized: "合成完成。",
    missing_audio_file: "请先选择音频文件。",
    request_failed: "请求失败",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => EN,
            Locale::Zh => ZH,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
