//! Input validation against the fields of a target struct.

use alloc::string::String;

use wr_reflect::Reflect;
use wr_reflect::info::{StructInfo, TypeInfo};
use wr_reflect::registry::{TypeRegistry, TypeTraitDefault};

use crate::capability::{Capabilities, ReflectInputValidator, ReflectRequestValueReceiver};
use crate::notification::{MISSING_INPUT, NotificationMap, UNMATCHED_INPUT, WRONG_TYPE};
use crate::params::InputParams;
use crate::schema::StructSchema;
use crate::{CollectError, InputError};

/// Returns `true` if a raw input of type `from` converts to `to` without loss.
///
/// A pointer target accepts what its pointee accepts.
///
/// ```
/// use wr_reflect::info::Typed;
/// use wr_respond::collector::is_convertible;
///
/// assert!(is_convertible(i32::type_info(), i64::type_info()));
/// assert!(is_convertible(<&str>::type_info(), Option::<String>::type_info()));
/// assert!(!is_convertible(f64::type_info(), i64::type_info()));
/// ```
pub fn is_convertible(from: &TypeInfo, to: &TypeInfo) -> bool {
    if from.ty_id() == to.ty_id() {
        return true;
    }
    match (from, to) {
        (_, TypeInfo::Pointer(pointer)) => is_convertible(from, pointer.pointee_info()),
        (TypeInfo::Scalar(from), TypeInfo::Scalar(to)) => from.kind().widens_to(to.kind()),
        _ => false,
    }
}

/// Reports where a set of input parameters does not fit a target struct.
///
/// For every input field of the target, in declaration order:
///
/// - An embedded field is walked as part of the target.
/// - A field that is not `pub`, or whose input name is `"-"`, is skipped.
///   Private fields are therefore never reported as missing.
/// - A missing parameter is reported unless the field is optional.
/// - A present parameter is consumed and checked by the first of: the
///   [`InputValidator`](crate::capability::InputValidator), the
///   [`RequestValueReceiver`](crate::capability::RequestValueReceiver) of
///   the field type, or [`is_convertible`].
///
/// Both capabilities are called on a default value of the field type, or
/// of the pointee type for `Option` and `Box` fields.
#[derive(Clone, Copy, Debug)]
pub struct InputCollector<'a> {
    capabilities: Capabilities<'a>,
}

impl<'a> InputCollector<'a> {
    #[inline]
    pub const fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            capabilities: Capabilities::new(registry),
        }
    }

    /// Checks `params` against `target`, consuming the matched parameters.
    pub fn collect(
        &self,
        target: &'static TypeInfo,
        params: &mut InputParams,
        notes: &mut NotificationMap,
    ) -> Result<(), CollectError> {
        let info = target
            .through_pointer()
            .as_struct()
            .map_err(|_| CollectError::NotAStruct {
                type_path: target.type_path(),
            })?;

        log::trace!("collecting input errors for `{}`", info.type_path());
        self.collect_struct(info, params, notes);
        Ok(())
    }

    /// Reports every parameter left in `params` as unmatched.
    pub fn report_unmatched(&self, params: &InputParams, notes: &mut NotificationMap) {
        for name in params.names() {
            notes.set_input_message(name, UNMATCHED_INPUT);
        }
    }

    /// Runs [`collect`](Self::collect) and then
    /// [`report_unmatched`](Self::report_unmatched).
    pub fn input_errors(
        &self,
        target: &'static TypeInfo,
        params: &mut InputParams,
    ) -> Result<NotificationMap, CollectError> {
        let mut notes = NotificationMap::new();
        self.collect(target, params, &mut notes)?;
        self.report_unmatched(params, &mut notes);
        Ok(notes)
    }

    fn collect_struct(
        &self,
        info: &'static StructInfo,
        params: &mut InputParams,
        notes: &mut NotificationMap,
    ) {
        let schema = StructSchema::of(info);

        for field in schema.iter() {
            if field.is_embedded() {
                match field.type_info().through_pointer().as_struct() {
                    Ok(embedded) => self.collect_struct(embedded, params, notes),
                    Err(_) => log::debug!(
                        "embedded `{}.{}` is not a struct and has no inputs",
                        schema.type_path(),
                        field.name(),
                    ),
                }
                continue;
            }

            if !field.is_visible() {
                continue;
            }
            let Some(name) = field.input_name().as_str() else {
                continue;
            };

            let Some(input) = params.remove(name) else {
                if !field.is_optional() {
                    notes.set_input_message(name, MISSING_INPUT);
                }
                continue;
            };

            if let Some(message) = self.check(field.type_info(), &*input) {
                notes.set_input_message(name, message);
            }
        }
    }

    /// Returns the message for `input` if it does not fit `field_type`.
    fn check(&self, field_type: &'static TypeInfo, input: &dyn Reflect) -> Option<String> {
        let zero_type = field_type.through_pointer();

        if let Some(meta) = self.capabilities.registry().get(zero_type.ty_id()) {
            let validates = meta.has_trait::<ReflectInputValidator>();
            let receives = meta.has_trait::<ReflectRequestValueReceiver>();

            if validates || receives {
                match meta.get_trait::<TypeTraitDefault>() {
                    Some(default) => {
                        let mut zero = default.default();
                        let outcome = if validates {
                            self.capabilities.validate_input(&*zero, input)
                        } else {
                            self.capabilities.receive(&mut *zero, input)
                        };
                        return outcome.and_then(Result::err).map(InputError::into_message);
                    }
                    None => log::warn!(
                        "`{}` has input capabilities but no default value, checking the input type instead",
                        zero_type.type_path(),
                    ),
                }
            }
        }

        if is_convertible(input.reflect_type_info(), field_type) {
            None
        } else {
            Some(String::from(WRONG_TYPE))
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use wr_reflect::Reflect;
    use wr_reflect::info::Typed;
    use wr_reflect::registry::TypeRegistry;

    use super::{InputCollector, is_convertible};
    use crate::capability::{
        InputValidator, ReflectInputValidator, ReflectRequestValueReceiver, RequestValueReceiver,
    };
    use crate::notification::{MISSING_INPUT, NotificationMap, UNMATCHED_INPUT, WRONG_TYPE};
    use crate::{CollectError, InputError, InputParams};

    #[derive(Reflect, Default)]
    #[reflect(default, type_trait = ReflectInputValidator)]
    pub struct Handle {
        pub value: String,
    }

    impl InputValidator for Handle {
        fn validate_input(&self, input: &dyn Reflect) -> Result<(), InputError> {
            match input.downcast_ref::<String>() {
                Some(handle) if !handle.is_empty() && !handle.contains(' ') => Ok(()),
                Some(_) => Err(InputError::new("Handles cannot contain spaces")),
                None => Err(InputError::new("Handles must be text")),
            }
        }
    }

    #[derive(Reflect, Default)]
    #[reflect(default, type_trait = ReflectRequestValueReceiver)]
    pub struct Age {
        pub years: u32,
    }

    impl RequestValueReceiver for Age {
        fn receive(&mut self, input: &dyn Reflect) -> Result<(), InputError> {
            let years = input
                .downcast_ref::<i64>()
                .ok_or_else(|| InputError::new("Age must be a number"))?;
            self.years = u32::try_from(*years).map_err(|_| InputError::new("Age out of range"))?;
            Ok(())
        }
    }

    #[derive(Reflect)]
    pub struct Contact {
        pub email: String,
        #[reflect(tag(request = "phone,optional"))]
        pub phone: Option<String>,
    }

    #[derive(Reflect)]
    pub struct Signup {
        #[reflect(embed)]
        pub contact: Contact,
        pub handle: Handle,
        #[reflect(tag(request = "age,optional"))]
        pub age: Option<Age>,
        #[reflect(tag(request = "invite_code"))]
        pub invite: u32,
        #[reflect(tag(request = "-"))]
        pub created_by: String,
        pub internal: u8,
        password_hash: String,
    }

    #[derive(Reflect, Default)]
    #[reflect(default, type_trait = (ReflectInputValidator, ReflectRequestValueReceiver))]
    pub struct Coupon {
        pub code: String,
    }

    impl InputValidator for Coupon {
        fn validate_input(&self, _: &dyn Reflect) -> Result<(), InputError> {
            Err(InputError::new("Coupon rejected by validation"))
        }
    }

    impl RequestValueReceiver for Coupon {
        fn receive(&mut self, _: &dyn Reflect) -> Result<(), InputError> {
            Err(InputError::new("Coupon rejected on receive"))
        }
    }

    #[derive(Reflect)]
    pub struct Checkout {
        pub coupon: Coupon,
        #[reflect(tag(request = "fallback,optional"))]
        pub fallback: Option<Coupon>,
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Signup>();
        registry.register::<Checkout>();
        registry
    }

    #[test]
    fn reports_required_and_unmatched() {
        let registry = registry();
        let mut params = InputParams::new()
            .with("handle", String::from("ana"))
            .with("invite_code", 7_u16)
            .with("internal", 1_u8)
            .with("nickname", String::from("an"))
            .with("created_by", String::from("me"));

        let notes = InputCollector::new(&registry)
            .input_errors(Signup::type_info(), &mut params)
            .unwrap();

        assert_eq!(notes.input_message("email"), Some(MISSING_INPUT));
        assert!(!notes.contains("phone"));
        assert!(!notes.contains("age"));
        assert!(!notes.contains("handle"));
        assert!(!notes.contains("invite_code"));
        assert_eq!(notes.input_message("nickname"), Some(UNMATCHED_INPUT));
        assert_eq!(notes.input_message("created_by"), Some(UNMATCHED_INPUT));
        assert!(!notes.contains("password_hash"));
        assert_eq!(notes.len(), 3);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn capabilities_take_precedence() {
        let registry = registry();
        let mut params = InputParams::new()
            .with("email", String::from("a@b.c"))
            .with("handle", String::from("two words"))
            .with("age", -3_i64)
            .with("invite_code", 9_i64)
            .with("internal", 1_u8);

        let mut notes = NotificationMap::new();
        InputCollector::new(&registry)
            .collect(Signup::type_info(), &mut params, &mut notes)
            .unwrap();

        assert_eq!(notes.input_message("handle"), Some("Handles cannot contain spaces"));
        assert_eq!(notes.input_message("age"), Some("Age out of range"));
        assert_eq!(notes.input_message("invite_code"), Some(WRONG_TYPE));
        assert!(!notes.contains("email"));
        assert!(params.is_empty());
    }

    #[test]
    fn embedded_fields_are_inputs_of_the_target() {
        let registry = registry();
        let mut params = InputParams::new().with("phone", 5_u8);

        let mut notes = NotificationMap::new();
        InputCollector::new(&registry)
            .collect(Signup::type_info(), &mut params, &mut notes)
            .unwrap();

        assert_eq!(notes.input_message("phone"), Some(WRONG_TYPE));
        assert_eq!(notes.input_message("email"), Some(MISSING_INPUT));
    }

    #[test]
    fn targets_must_be_structs() {
        let registry = registry();
        let collector = InputCollector::new(&registry);
        let error = collector
            .input_errors(Vec::<u8>::type_info(), &mut InputParams::new())
            .unwrap_err();
        assert!(matches!(error, CollectError::NotAStruct { .. }));

        assert!(
            collector
                .input_errors(Option::<Contact>::type_info(), &mut InputParams::new())
                .is_ok()
        );
    }

    #[test]
    fn validator_wins_over_receiver() {
        let registry = registry();
        let mut params = InputParams::new()
            .with("coupon", String::from("SAVE10"))
            .with("fallback", String::from("SAVE5"));

        let notes = InputCollector::new(&registry)
            .input_errors(Checkout::type_info(), &mut params)
            .unwrap();

        assert_eq!(notes.input_message("coupon"), Some("Coupon rejected by validation"));
        assert_eq!(notes.input_message("fallback"), Some("Coupon rejected by validation"));
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn convertibility() {
        assert!(is_convertible(u8::type_info(), u16::type_info()));
        assert!(is_convertible(u16::type_info(), i32::type_info()));
        assert!(!is_convertible(u32::type_info(), i32::type_info()));
        assert!(is_convertible(i32::type_info(), f64::type_info()));
        assert!(!is_convertible(i32::type_info(), f32::type_info()));
        assert!(is_convertible(f32::type_info(), f64::type_info()));
        assert!(is_convertible(String::type_info(), <&str>::type_info()));
        assert!(!is_convertible(String::type_info(), i64::type_info()));
        assert!(is_convertible(u8::type_info(), Option::<u64>::type_info()));
        assert!(!is_convertible(Option::<u8>::type_info(), u8::type_info()));
    }
}
