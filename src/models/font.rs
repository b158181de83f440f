#[derive(Debug, Clone, Copy)]
pub struct FontOption {
    pub value: &'static str,
    pub font_family: &'static str,
}

pub const FONT_OPTIONS: [FontOption; 10] = [
    FontOption { value: "Noto Sans KR", font_family: "\"Noto Sans KR\", sans-serif" },
    FontOption { value: "Nanum Gothic", font_family: "\"Nanum Gothic\", sans-serif" },
    FontOption { value: "Nanum Myeongjo", font_family: "\"Nanum Myeongjo\", serif" },
    FontOption { value: "Gaegu", font_family: "\"Gaegu\", cursive" },
    FontOption { value: "Jua", font_family: "\"Jua\", sans-serif" },
    FontOption { value: "Cute Font", font_family: "\"Cute Font\", cursive" },
    FontOption { value: "Sunflower", font_family: "\"Sunflower\", sans-serif" },
    FontOption { value: "Do Hyeon", font_family: "\"Do Hyeon\", sans-serif" },
    FontOption { value: "Hi Melody", font_family: "\"Hi Melody\", cursive" },
    FontOption { value: "Poor Story", font_family: "\"Poor Story\", cursive" },
];

pub fn is_known_font(name: &str) -> bool {
    FONT_OPTIONS.iter().any(|font| font.value == name)
}
