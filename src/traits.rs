use crate::{ArrayError, DynamicArray};

/// Implements collect into `DynamicArray`.
pub trait CollectArray: Iterator {
    fn collect_array(self) -> Result<DynamicArray<Self::Item>, ArrayError>
        where
            Self::Item: Default;

    fn collect_result_array<I, E>(self) -> Result<DynamicArray<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>,
            I: Default,
            E: From<ArrayError>;
}

impl<Q: Iterator> CollectArray for Q {
    fn collect_array(self) -> Result<DynamicArray<Self::Item>, ArrayError>
        where
            Self::Item: Default,
    {
        let (lower, _) = self.size_hint();
        let mut array = DynamicArray::with_capacity(lower.max(4));
        for item in self {
            array.push_back(item)?;
        }
        Ok(array)
    }

    fn collect_result_array<I, E>(self) -> Result<DynamicArray<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>,
            I: Default,
            E: From<ArrayError>,
    {
        let (lower, _) = self.size_hint();
        let mut array = DynamicArray::with_capacity(lower.max(4));
        for maybe_item in self {
            let item = maybe_item?;
            array.push_back(item).map_err(E::from)?;
        }
        Ok(array)
    }
}
