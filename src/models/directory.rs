use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 법률 지원 센터 (읽기 전용 스냅샷)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalAidCenter {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub services: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub district: String,
}

/// 긴급 연락처
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub number: String,
    pub description: String,
    pub category: String,
}

/// 카테고리별 연락처 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactGroup {
    pub category: String,
    pub contacts: Vec<EmergencyContact>,
}

/// 카테고리 → 연락처 목록 매핑.
///
/// 받은 순서 그대로 카테고리와 연락처 순서를 유지한다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmergencyDirectory {
    groups: Vec<ContactGroup>,
}

impl EmergencyDirectory {
    pub fn new(groups: Vec<ContactGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[ContactGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 모든 연락처 수 (카테고리 순서대로 평탄화)
    pub fn contact_count(&self) -> usize {
        self.groups.iter().map(|g| g.contacts.len()).sum()
    }

    /// 평탄화된 인덱스로 연락처 조회
    pub fn contact_at(&self, index: usize) -> Option<&EmergencyContact> {
        self.groups.iter().flat_map(|g| g.contacts.iter()).nth(index)
    }

    pub fn get(&self, category: &str) -> Option<&[EmergencyContact]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.contacts.as_slice())
    }
}

impl<'de> Deserialize<'de> for EmergencyDirectory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = EmergencyDirectory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category to emergency contact list")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups: Vec<ContactGroup> = Vec::new();
                while let Some((category, contacts)) =
                    map.next_entry::<String, Vec<EmergencyContact>>()?
                {
                    // 중복 키는 마지막 값으로 덮어쓰되 처음 위치 유지
                    if let Some(existing) = groups.iter_mut().find(|g| g.category == category) {
                        existing.contacts = contacts;
                    } else {
                        groups.push(ContactGroup { category, contacts });
                    }
                }
                Ok(EmergencyDirectory { groups })
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, number: &str, category: &str) -> EmergencyContact {
        EmergencyContact {
            name: name.to_string(),
            number: number.to_string(),
            description: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_directory_preserves_received_category_order() {
        let body = r#"{
            "women": [{"name": "Women Helpline", "number": "1091", "description": "d", "category": "women"}],
            "police": [{"name": "Police", "number": "100", "description": "d", "category": "police"}],
            "child": [{"name": "Childline", "number": "1098", "description": "d", "category": "child"}]
        }"#;
        let directory: EmergencyDirectory = serde_json::from_str(body).unwrap();
        let categories: Vec<&str> = directory
            .groups()
            .iter()
            .map(|g| g.category.as_str())
            .collect();
        assert_eq!(categories, vec!["women", "police", "child"]);
    }

    #[test]
    fn test_directory_preserves_contact_order() {
        let body = r#"{
            "police": [
                {"name": "Police", "number": "100", "description": "a", "category": "police"},
                {"name": "Emergency", "number": "112", "description": "b", "category": "police"}
            ]
        }"#;
        let directory: EmergencyDirectory = serde_json::from_str(body).unwrap();
        let police = directory.get("police").unwrap();
        assert_eq!(police[0].number, "100");
        assert_eq!(police[1].number, "112");
        assert_eq!(directory.contact_count(), 2);
        assert_eq!(directory.contact_at(1).unwrap().name, "Emergency");
        assert!(directory.contact_at(2).is_none());
    }

    #[test]
    fn test_directory_rejects_malformed_entry() {
        let body = r#"{"police": [{"name": "Police", "number": 100}]}"#;
        assert!(serde_json::from_str::<EmergencyDirectory>(body).is_err());
    }

    #[test]
    fn test_directory_rejects_non_map() {
        assert!(serde_json::from_str::<EmergencyDirectory>("[]").is_err());
    }

    #[test]
    fn test_empty_directory() {
        let directory: EmergencyDirectory = serde_json::from_str("{}").unwrap();
        assert!(directory.is_empty());
        let with_empty_group = EmergencyDirectory::new(vec![ContactGroup {
            category: "police".into(),
            contacts: vec![],
        }]);
        assert!(!with_empty_group.is_empty());
        assert_eq!(with_empty_group.contact_count(), 0);
        let filled = EmergencyDirectory::new(vec![ContactGroup {
            category: "police".into(),
            contacts: vec![contact("Police", "100", "police")],
        }]);
        assert!(!filled.is_empty());
    }

    #[test]
    fn test_center_decoding() {
        let body = r#"[{
            "id": 1, "name": "District Legal Services Authority",
            "address": "Civil Court Campus", "phone": "0120-2345678",
            "services": ["Free legal aid", "Lok Adalat"],
            "latitude": 28.57, "longitude": 77.32, "district": "Gautam Buddh Nagar"
        }]"#;
        let centers: Vec<LegalAidCenter> = serde_json::from_str(body).unwrap();
        assert_eq!(centers.len(), 1);
        assert_eq!(centers[0].services, vec!["Free legal aid", "Lok Adalat"]);
    }
}
