use alloc::vec::Vec;

use wr_reflect::Reflect;
use wr_reflect::info::TypeInfo;
use wr_reflect::registry::TypeRegistry;
use wr_respond::{
    Constructor, InputCollector, InputParams, Options, RenderError, ResponseBuilder, ResponseValue,
};

use crate::{CodecError, Envelope, EnvelopeOptions};

/// The status code of an input error response.
pub const BAD_REQUEST: u16 = 400;

/// The encapsulated API format: every response is wrapped in an
/// [`Envelope`] and encoded as JSON.
///
/// # Examples
///
/// ```
/// use wr_codec::{ApiCodec, EnvelopeOptions};
/// use wr_reflect::Reflect;
/// use wr_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect)]
/// pub struct Station {
///     pub name: String,
/// }
///
/// let registry = TypeRegistry::new();
/// let codec = ApiCodec::new(&registry);
/// let options = EnvelopeOptions::new(200, "http", "radio.test");
///
/// let bytes = codec.marshal(&mut Station { name: "KEXP".into() }, &options).unwrap();
/// let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
/// assert_eq!(json["meta"]["code"], 200);
/// assert_eq!(json["response"]["name"], "KEXP");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ApiCodec<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> ApiCodec<'a> {
    pub const CONTENT_TYPE: &'static str = "application/vnd.radiobox.encapsulated";
    pub const FILE_EXTENSION: &'static str = ".rbx";

    #[inline]
    pub const fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub const fn content_type(&self) -> &'static str {
        Self::CONTENT_TYPE
    }

    #[inline]
    pub const fn file_extension(&self) -> &'static str {
        Self::FILE_EXTENSION
    }

    /// Parses the options tree named by the `joins` of `options`.
    ///
    /// Invalid JSON is logged and treated as no options.
    pub fn joins(&self, options: &EnvelopeOptions) -> Option<Options> {
        let source = options.joins_source()?;
        match serde_json::from_str(source) {
            Ok(joins) => Some(joins),
            Err(error) => {
                log::warn!("could not load joins options: {error}");
                None
            }
        }
    }

    /// Renders `value` and wraps it in the envelope.
    pub fn respond(
        &self,
        value: &mut dyn Reflect,
        options: &EnvelopeOptions,
    ) -> Result<ResponseValue, RenderError> {
        let joins = self.joins(options);
        let envelope = Envelope::new(self.registry, options);
        ResponseBuilder::new(self.registry)
            .with_constructor(&envelope)
            .create_wrapped_response(value, joins.as_ref())
    }

    /// Renders, wraps and encodes `value`.
    pub fn marshal(
        &self,
        value: &mut dyn Reflect,
        options: &EnvelopeOptions,
    ) -> Result<Vec<u8>, CodecError> {
        let response = self.respond(value, options)?;
        Ok(serde_json::to_vec(&response)?)
    }

    /// Encodes the input errors of `params` against `target` as a
    /// [`BAD_REQUEST`] response.
    ///
    /// The messages are both the notifications and the response body.
    pub fn marshal_input_errors(
        &self,
        target: &'static TypeInfo,
        params: &mut InputParams,
        mut options: EnvelopeOptions,
    ) -> Result<Vec<u8>, CodecError> {
        let notes = InputCollector::new(self.registry).input_errors(target, params)?;
        let body = notes.to_response_value();

        options.status = BAD_REQUEST;
        options.notifications.extend(notes);

        let envelope = Envelope::new(self.registry, &options);
        // The messages have no related links.
        let response = envelope.wrap(body, &());
        Ok(serde_json::to_vec(&response)?)
    }

    pub fn unmarshal(&self, _data: &[u8], _target: &mut dyn Reflect) -> Result<(), CodecError> {
        Err(CodecError::UnmarshalUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::{Value, json};
    use wr_reflect::Reflect;
    use wr_reflect::info::Typed;
    use wr_reflect::registry::TypeRegistry;
    use wr_respond::capability::{ReflectRelatedLinker, RelatedLinker};
    use wr_respond::{InputParams, ResponseMap, ResponseValue};

    use super::{ApiCodec, BAD_REQUEST};
    use crate::{CodecError, EnvelopeOptions};

    #[derive(Reflect)]
    #[reflect(type_trait = ReflectRelatedLinker)]
    pub struct Show {
        pub name: String,
        pub episodes: Vec<Episode>,
    }

    impl RelatedLinker for Show {
        fn related_links(&self) -> BTreeMap<String, String> {
            BTreeMap::from([(String::from("self"), String::from("/shows/1"))])
        }
    }

    #[derive(Reflect)]
    pub struct Episode {
        pub title: String,
    }

    #[derive(Reflect)]
    pub struct Signup {
        pub email: String,
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Show>();
        registry.register::<Signup>();
        registry
    }

    fn show() -> Show {
        Show {
            name: String::from("Night Air"),
            episodes: Vec::from([Episode { title: String::from("Pilot") }]),
        }
    }

    fn marshal(codec: &ApiCodec<'_>, options: &EnvelopeOptions) -> Value {
        let bytes = codec.marshal(&mut show(), options).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn envelope_carries_meta() {
        let registry = registry();
        let codec = ApiCodec::new(&registry);
        let mut params = ResponseMap::new();
        params.insert(String::from("page"), ResponseValue::from("2"));
        let options = EnvelopeOptions::new(200, EnvelopeOptions::protocol_for(true), "radio.test")
            .with_input_params(params);

        assert_eq!(
            marshal(&codec, &options),
            json!({
                "meta": {
                    "code": 200,
                    "input_params": { "page": "2" },
                    "links": { "self": "https://radio.test/shows/1" },
                },
                "notifications": {},
                "response": { "name": "Night Air", "episodes": [{ "title": "Pilot" }] },
            }),
        );
    }

    #[test]
    fn joins_wrap_sub_lists() {
        let registry = registry();
        let codec = ApiCodec::new(&registry);
        let options =
            EnvelopeOptions::new(200, "http", "radio.test").with_joins(r#"{"episodes": {}}"#);

        let json = marshal(&codec, &options);
        assert_eq!(
            json["response"]["episodes"],
            json!({
                "meta": { "code": 200, "input_params": {}, "links": {} },
                "notifications": {},
                "response": [{ "title": "Pilot" }],
            }),
        );
    }

    #[test]
    fn joins_fall_back_to_input_param() {
        let registry = registry();
        let codec = ApiCodec::new(&registry);

        let mut params = ResponseMap::new();
        params.insert(String::from("joins"), ResponseValue::from(r#"{"episodes": {}}"#));
        let options = EnvelopeOptions::new(200, "http", "radio.test").with_input_params(params);
        assert!(codec.joins(&options).is_some_and(|joins| joins.contains("episodes")));

        let options = options.with_joins("{not json");
        assert!(codec.joins(&options).is_none());
        assert_eq!(marshal(&codec, &options)["response"]["episodes"], json!([{ "title": "Pilot" }]));
    }

    #[test]
    fn input_errors_are_bad_requests() {
        let registry = registry();
        let codec = ApiCodec::new(&registry);
        let mut params = InputParams::new().with("nickname", String::from("an"));

        let bytes = codec
            .marshal_input_errors(
                Signup::type_info(),
                &mut params,
                EnvelopeOptions::new(200, "http", "radio.test"),
            )
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        let messages = json!({
            "email": "No input for required field",
            "nickname": "No target field found for this input",
        });
        assert_eq!(json["meta"]["code"], BAD_REQUEST);
        assert_eq!(json["notifications"], messages);
        assert_eq!(json["response"], messages);
    }

    #[test]
    fn constants_and_unmarshal() {
        let registry = TypeRegistry::new();
        let codec = ApiCodec::new(&registry);
        assert_eq!(codec.content_type(), "application/vnd.radiobox.encapsulated");
        assert_eq!(codec.file_extension(), ".rbx");

        let error = codec.unmarshal(b"{}", &mut 0_u8).unwrap_err();
        assert!(matches!(error, CodecError::UnmarshalUnsupported));
        assert_eq!(error.to_string(), "Unmarshal not supported");
    }
}
