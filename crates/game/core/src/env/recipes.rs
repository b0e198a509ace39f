/// Crafting recipe: the output item and the ingredients consumed to make it.
///
/// Ingredients may repeat; each listed entry consumes one inventory instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub output: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(output: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: output.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}
