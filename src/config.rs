// ビルド時の feature で出力内容を決める
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hello,
    Bye,
    Default,
}

impl Mode {
    // printhello と printbye が両方有効なら printhello を優先
    pub fn from_build() -> Self {
        Self::from_flags(cfg!(feature = "printhello"), cfg!(feature = "printbye"))
    }

    pub fn from_flags(hello: bool, bye: bool) -> Self {
        if hello {
            Mode::Hello
        } else if bye {
            Mode::Bye
        } else {
            Mode::Default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSource {
    Literal,
    Named,
}

impl OperandSource {
    pub fn from_build() -> Self {
        if cfg!(feature = "named-constants") {
            OperandSource::Named
        } else {
            OperandSource::Literal
        }
    }
}
