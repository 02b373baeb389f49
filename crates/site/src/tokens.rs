use motion::ThemeMode;

/// Class names and colours that differ between dark and light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub body: &'static str,
    pub text: &'static str,
    pub sub_text: &'static str,
    pub sub_text_hover: &'static str,
    pub header_solid: &'static str,
    pub header_border: &'static str,
    pub toggle_button: &'static str,
    pub card: &'static str,
}

impl ThemeTokens {
    pub fn for_theme(theme: ThemeMode) -> Self {
        Self {
            body: theme.pick("bg-[#0E1621] text-white", "bg-white text-slate-900"),
            text: theme.pick("text-white", "text-slate-900"),
            sub_text: theme.pick("text-[#B6C7D6]", "text-slate-600"),
            sub_text_hover: theme.pick("hover:text-white", "hover:text-[#2563EB]"),
            header_solid: theme.pick("bg-[#0E1621]/90", "bg-white/80"),
            header_border: theme.pick("border-white/10", "border-slate-200"),
            toggle_button: theme.pick(
                "hover:bg-white/10 text-white",
                "hover:bg-slate-100 text-slate-900",
            ),
            card: theme.pick("bg-white/5 border-white/10", "bg-slate-50 border-slate-200"),
        }
    }

    pub fn header_class(&self, scrolled: bool) -> String {
        let base = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";
        if scrolled {
            format!(
                "{base} {} backdrop-blur-md py-4 border-b {} shadow-lg",
                self.header_solid, self.header_border
            )
        } else {
            format!("{base} bg-transparent py-8")
        }
    }
}
