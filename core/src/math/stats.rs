use ndarray::Array2;

pub struct StatsHelper;

impl StatsHelper {
    /// Mean of the field over cells where the mask is true. None when the
    /// mask selects nothing, so callers cannot mistake "no data" for zero.
    pub fn masked_mean(field: &Array2<f32>, mask: &Array2<bool>) -> Option<f32> {
        let mut sum = 0.0f32;
        let mut count = 0usize;
        for (value, &keep) in field.iter().zip(mask.iter()) {
            if keep {
                sum += value;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn masked_mean_averages_selected_cells_only() {
        let field = array![[1.0, 2.0], [3.0, 40.0]];
        let mask = array![[true, true], [true, false]];
        assert_eq!(StatsHelper::masked_mean(&field, &mask), Some(2.0));
    }

    #[test]
    fn masked_mean_of_empty_mask_is_none() {
        let field = array![[1.0, 2.0]];
        let mask = array![[false, false]];
        assert_eq!(StatsHelper::masked_mean(&field, &mask), None);
    }
}
