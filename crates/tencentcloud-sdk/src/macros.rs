/// Define a service client wrapping [`ApiClient`](tencentcloud_http::ApiClient).
///
/// Generates the struct, its constructors, and one async method per listed
/// operation. Every method forwards to `ApiClient::invoke` with the action
/// name taken from the service's operation enum.
macro_rules! service_client {
    (
        $(#[$meta:meta])*
        $client:ident {
            descriptor: $descriptor:path,
            operation: $operation:ident,
        }
        $(
            $(#[$op_meta:meta])*
            $method:ident => $op:ident($request:ty) -> $response:ty;
        )*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $client {
            inner: ::tencentcloud_http::ApiClient,
        }

        impl $client {
            /// Create a client with the default profile.
            ///
            /// # Errors
            ///
            /// Returns [`SdkError::Transport`](tencentcloud_core::SdkError::Transport)
            /// if the HTTP client cannot be created.
            pub fn new(
                credential: ::tencentcloud_core::Credential,
                region: impl Into<::tencentcloud_core::Region>,
            ) -> Result<Self, ::tencentcloud_core::SdkError> {
                Self::with_profile(credential, region, ::tencentcloud_core::ClientProfile::default())
            }

            /// Create a client with explicit settings.
            ///
            /// # Errors
            ///
            /// Returns [`SdkError::Transport`](tencentcloud_core::SdkError::Transport)
            /// if the HTTP client cannot be created.
            pub fn with_profile(
                credential: ::tencentcloud_core::Credential,
                region: impl Into<::tencentcloud_core::Region>,
                profile: ::tencentcloud_core::ClientProfile,
            ) -> Result<Self, ::tencentcloud_core::SdkError> {
                let provider = ::tencentcloud_core::StaticCredentialProvider::new(credential);
                Self::with_provider(::std::sync::Arc::new(provider), region, profile)
            }

            /// Create a client signing with the credential `credentials` supplies
            /// now. Later changes in the provider do not reach this client.
            ///
            /// # Errors
            ///
            /// Returns [`SdkError::Request`](tencentcloud_core::SdkError::Request)
            /// if no credential is available, or
            /// [`SdkError::Transport`](tencentcloud_core::SdkError::Transport)
            /// if the HTTP client cannot be created.
            pub fn with_provider(
                credentials: ::std::sync::Arc<dyn ::tencentcloud_core::CredentialProvider>,
                region: impl Into<::tencentcloud_core::Region>,
                profile: ::tencentcloud_core::ClientProfile,
            ) -> Result<Self, ::tencentcloud_core::SdkError> {
                let inner =
                    ::tencentcloud_http::ApiClient::new($descriptor, credentials, region.into(), profile)?;
                Ok(Self { inner })
            }

            /// Create a client over a caller-supplied transport.
            ///
            /// # Errors
            ///
            /// Returns [`SdkError::Request`](tencentcloud_core::SdkError::Request)
            /// if `credentials` cannot supply a credential.
            pub fn with_transport(
                credentials: ::std::sync::Arc<dyn ::tencentcloud_core::CredentialProvider>,
                region: impl Into<::tencentcloud_core::Region>,
                profile: ::tencentcloud_core::ClientProfile,
                transport: ::std::sync::Arc<dyn ::tencentcloud_http::HttpTransport>,
            ) -> Result<Self, ::tencentcloud_core::SdkError> {
                let inner = ::tencentcloud_http::ApiClient::with_transport(
                    $descriptor,
                    credentials,
                    region.into(),
                    profile,
                    transport,
                )?;
                Ok(Self { inner })
            }

            /// The underlying transport core.
            #[must_use]
            pub fn api_client(&self) -> &::tencentcloud_http::ApiClient {
                &self.inner
            }

            $(
                $(#[$op_meta])*
                ///
                /// # Errors
                ///
                /// Returns the [`SdkError`](tencentcloud_core::SdkError) reported by the
                /// transport core, unmodified.
                pub async fn $method(
                    &self,
                    request: &$request,
                ) -> Result<$response, ::tencentcloud_core::SdkError> {
                    self.inner.invoke($operation::$op.as_str(), request).await
                }
            )*
        }
    };
}

pub(crate) use service_client;
