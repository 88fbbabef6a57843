#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultType {
    #[default]
    Mixed,
    Recent,
    Popular
}

impl ResultType {
    pub fn from_string(string: impl Into<String>) -> Self {
        match string.into().as_str() {
            "recent" => ResultType::Recent,
            "popular" => ResultType::Popular,
            _ => ResultType::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Mixed => "mixed",
            ResultType::Recent => "recent",
            ResultType::Popular => "popular"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers
}

impl DistanceUnit {
    pub fn from_string(string: impl Into<String>) -> Self {
        match string.into().as_str() {
            "km" => DistanceUnit::Kilometers,
            _ => DistanceUnit::Miles
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km"
        }
    }
}
