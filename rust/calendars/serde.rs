use crate::calendars::{Cal, Calendar, NamedCal, UnionCal};
use crate::json::JSON;

impl JSON for Cal {}
impl JSON for UnionCal {}
impl JSON for NamedCal {}
impl JSON for Calendar {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::ndt;

    #[test]
    fn test_cal_json() {
        let hols = vec![ndt(2015, 9, 8), ndt(2015, 9, 10)];
        let hcal = Cal::from_holidays(hols);
        let js = hcal.to_json().unwrap();
        let hcal2 = Cal::from_json(&js).unwrap();
        assert_eq!(hcal, hcal2);
    }

    #[test]
    fn test_named_cal_json() {
        let ncal = NamedCal::try_new("fi,se").unwrap();
        let js = ncal.to_json().unwrap();
        assert_eq!(js, "{\"name\":\"fi,se\"}");
        let ncal2 = NamedCal::from_json(&js).unwrap();
        assert_eq!(ncal, ncal2);
    }

    #[test]
    fn test_named_cal_json_bad_country() {
        let result = NamedCal::from_json("{\"name\":\"fi,xx\"}");
        assert!(result.is_err());
    }

    #[test]
    fn test_cal_type_json() {
        let cal = Calendar::UnionCal(UnionCal::new(vec![
            NamedCal::try_new("fi").unwrap().into(),
            Cal::from_holidays(vec![ndt(2021, 9, 24)]).into(),
        ]));
        let js = cal.to_json().unwrap();
        let cal2 = Calendar::from_json(&js).unwrap();
        assert_eq!(cal, cal2);
    }
}
