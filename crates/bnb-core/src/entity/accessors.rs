/// Generate typed getters and chaining `set_*` setters over an entity's record.
///
/// Each entry is `getter: kind` or `getter("wire_key"): kind`, where kind is
/// one of `str`, `int`, `float`, `bool` or `json`. Getters return `None` for
/// unset and null values; setters accept anything convertible into a JSON
/// value, including `None` to store an explicit null.
///
/// ```ignore
/// field_accessors!(ListingRoom {
///   id: int,
///   room_number: int,
///   room_type: str,
/// });
/// ```
#[macro_export]
macro_rules! field_accessors {
  (@field $field:ident [] $kind:ident) => {
    $crate::field_accessors!(@emit $field, stringify!($field), $kind);
  };
  (@field $field:ident [$key:literal] $kind:ident) => {
    $crate::field_accessors!(@emit $field, $key, $kind);
  };

  (@emit $field:ident, $key:expr, $kind:ident) => {
    $crate::field_accessors!(@get $field, $key, $kind);
    $crate::paste::paste! {
      pub fn [<set_ $field>](&mut self, value: impl Into<$crate::serde_json::Value>) -> &mut Self {
        $crate::entity::Entity::record_mut(self).set($key, value);
        self
      }
    }
  };

  (@get $field:ident, $key:expr, str) => {
    pub fn $field(&self) -> Option<&str> {
      $crate::entity::Entity::record(self).get_str($key)
    }
  };
  (@get $field:ident, $key:expr, int) => {
    pub fn $field(&self) -> Option<i64> {
      $crate::entity::Entity::record(self).get_i64($key)
    }
  };
  (@get $field:ident, $key:expr, float) => {
    pub fn $field(&self) -> Option<f64> {
      $crate::entity::Entity::record(self).get_f64($key)
    }
  };
  (@get $field:ident, $key:expr, bool) => {
    pub fn $field(&self) -> Option<bool> {
      $crate::entity::Entity::record(self).get_bool($key)
    }
  };
  (@get $field:ident, $key:expr, json) => {
    pub fn $field(&self) -> Option<&$crate::serde_json::Value> {
      $crate::entity::Entity::record(self).get($key)
    }
  };

  ($ty:ty { $($field:ident $(($key:literal))? : $kind:ident),* $(,)? }) => {
    impl $ty {
      $( $crate::field_accessors!(@field $field [$($key)?] $kind); )*
    }
  };
}
