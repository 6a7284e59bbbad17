use base64::{engine::general_purpose::STANDARD, Engine as _};
use neo_config::NefSettings;
use neo_crypto::double_sha256;
use neo_io::{BinaryWriter, IoError, MemoryReader, NeoEncode, NeoRead, NeoWrite};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::NefError;

use super::{
    token::MethodToken, CHECKSUM_SIZE, COMPILER_FIELD_SIZE, NEF_MAGIC, SOURCE_URL_MAX, TOKENS_MAX,
};

/// A Neo executable: compiled script plus compiler metadata and method tokens.
///
/// The checksum is always derived from the other fields; it cannot be set
/// directly, so every `NefFile` value is self-consistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NefFile {
    compiler: String,
    source: String,
    tokens: Vec<MethodToken>,
    script: Vec<u8>,
    checksum: u32,
}

impl NefFile {
    pub fn new(
        compiler: impl Into<String>,
        source: impl Into<String>,
        tokens: Vec<MethodToken>,
        script: Vec<u8>,
    ) -> Result<Self, NefError> {
        let mut nef = Self {
            compiler: compiler.into(),
            source: source.into(),
            tokens,
            script,
            checksum: 0,
        };
        nef.validate(TOKENS_MAX)?;
        nef.checksum = nef.compute_checksum();
        Ok(nef)
    }

    pub fn builder() -> NefFileBuilder {
        NefFileBuilder::default()
    }

    /// Builds and serializes a container in one step, with an empty source.
    pub fn encode(
        compiler: &str,
        tokens: &[MethodToken],
        script: &[u8],
    ) -> Result<Vec<u8>, NefError> {
        Ok(Self::new(compiler, "", tokens.to_vec(), script.to_vec())?.to_bytes())
    }

    /// Decodes a container with the default limits.
    pub fn decode(bytes: &[u8]) -> Result<Self, NefError> {
        Self::decode_with(bytes, &NefSettings::default())
    }

    /// Decodes a container, verifying layout, reserved fields and checksum.
    pub fn decode_with(bytes: &[u8], settings: &NefSettings) -> Result<Self, NefError> {
        if bytes.len() > settings.max_file_size {
            return Err(NefError::too_large("file size", bytes.len(), settings.max_file_size));
        }

        if bytes.len() < HEADER_SIZE + CHECKSUM_SIZE {
            return Err(IoError::Truncated {
                needed: HEADER_SIZE + CHECKSUM_SIZE,
                remaining: bytes.len(),
            }
            .into());
        }

        let magic = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        if magic != NEF_MAGIC {
            return Err(NefError::BadMagic(magic));
        }

        // Checksum first: any tampering surfaces as a mismatch, whatever field it hits.
        let (body, tail) = bytes.split_at(bytes.len() - CHECKSUM_SIZE);
        let stored = u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]);
        let computed = checksum_of(body);
        if stored != computed {
            return Err(NefError::ChecksumMismatch { stored, computed });
        }

        let mut reader = MemoryReader::new(body);
        reader.read_u32()?;

        let compiler = reader.read_fixed_string(COMPILER_FIELD_SIZE)?;
        let source = reader.read_var_string(SOURCE_URL_MAX as u64)?;
        if reader.read_u8()? != 0 {
            return Err(NefError::Malformed("reserved byte must be zero"));
        }

        let count = reader.read_varint(settings.max_tokens as u64)? as usize;
        let mut tokens = Vec::with_capacity(count);
        for _ in 0..count {
            tokens.push(MethodToken::decode(&mut reader)?);
        }

        if reader.read_u16()? != 0 {
            return Err(NefError::Malformed("reserved word must be zero"));
        }

        let script = reader.read_var_bytes(settings.max_file_size as u64)?;
        if script.is_empty() {
            return Err(NefError::Malformed("script is empty"));
        }

        if !reader.is_empty() {
            return Err(IoError::TrailingBytes(reader.remaining()).into());
        }

        debug!(
            compiler = %compiler,
            tokens = tokens.len(),
            script_len = script.len(),
            "decoded nef file"
        );
        Ok(Self {
            compiler,
            source,
            tokens,
            script,
            checksum: stored,
        })
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[MethodToken] {
        &self.tokens
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_array()
    }

    /// Double SHA-256 over everything but the checksum, first four bytes little-endian.
    pub fn compute_checksum(&self) -> u32 {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.encode_body(&mut writer);
        checksum_of(writer.as_bytes())
    }

    fn validate(&self, max_tokens: usize) -> Result<(), NefError> {
        if self.compiler.len() > COMPILER_FIELD_SIZE {
            return Err(NefError::too_large("compiler", self.compiler.len(), COMPILER_FIELD_SIZE));
        }
        if self.compiler.contains('\0') {
            return Err(NefError::NulInCompiler);
        }
        if self.source.len() > SOURCE_URL_MAX {
            return Err(NefError::too_large("source", self.source.len(), SOURCE_URL_MAX));
        }
        if self.tokens.len() > max_tokens {
            return Err(NefError::too_large("token count", self.tokens.len(), max_tokens));
        }
        for token in &self.tokens {
            token.validate()?;
        }
        if self.script.is_empty() {
            return Err(NefError::EmptyScript);
        }
        Ok(())
    }

    fn encode_body<W: NeoWrite>(&self, writer: &mut W) {
        writer.write_u32(NEF_MAGIC);
        let written = writer.write_fixed_string(&self.compiler, COMPILER_FIELD_SIZE);
        debug_assert!(written.is_ok(), "compiler length is checked on construction");
        writer.write_var_string(&self.source);
        writer.write_u8(0);
        writer.write_varint(self.tokens.len() as u64);
        for token in &self.tokens {
            token.neo_encode(writer);
        }
        writer.write_u16(0);
        writer.write_var_bytes(&self.script);
    }
}

/// Magic plus the fixed compiler field.
const HEADER_SIZE: usize = 4 + COMPILER_FIELD_SIZE;

fn checksum_of(body: &[u8]) -> u32 {
    let hash = double_sha256(body);
    u32::from_le_bytes([hash[0], hash[1], hash[2], hash[3]])
}

impl NeoEncode for NefFile {
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        self.encode_body(writer);
        writer.write_u32(self.checksum);
    }

    fn size(&self) -> usize {
        let tokens: usize = self.tokens.iter().map(|token| token.size()).sum();
        4 + COMPILER_FIELD_SIZE
            + neo_io::var_bytes_size(self.source.len())
            + 1
            + neo_io::var_size(self.tokens.len() as u64)
            + tokens
            + 2
            + neo_io::var_bytes_size(self.script.len())
            + CHECKSUM_SIZE
    }
}

/// Incremental construction of a [`NefFile`].
#[derive(Clone, Debug, Default)]
pub struct NefFileBuilder {
    compiler: String,
    source: String,
    tokens: Vec<MethodToken>,
    script: Vec<u8>,
}

impl NefFileBuilder {
    pub fn compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn token(mut self, token: MethodToken) -> Self {
        self.tokens.push(token);
        self
    }

    pub fn tokens(mut self, tokens: impl IntoIterator<Item = MethodToken>) -> Self {
        self.tokens.extend(tokens);
        self
    }

    pub fn script(mut self, script: impl Into<Vec<u8>>) -> Self {
        self.script = script.into();
        self
    }

    pub fn build(self) -> Result<NefFile, NefError> {
        NefFile::new(self.compiler, self.source, self.tokens, self.script)
    }
}

#[derive(Serialize, Deserialize)]
struct NefFileJson {
    magic: u32,
    compiler: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    tokens: Vec<MethodToken>,
    script: String,
    checksum: u32,
}

impl Serialize for NefFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NefFileJson {
            magic: NEF_MAGIC,
            compiler: self.compiler.clone(),
            source: self.source.clone(),
            tokens: self.tokens.clone(),
            script: STANDARD.encode(&self.script),
            checksum: self.checksum,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NefFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = NefFileJson::deserialize(deserializer)?;
        if raw.magic != NEF_MAGIC {
            return Err(de::Error::custom(NefError::BadMagic(raw.magic)));
        }

        let script = STANDARD
            .decode(raw.script.as_bytes())
            .map_err(|err| de::Error::custom(format!("nef: script is not base64: {err}")))?;
        let nef = NefFile::new(raw.compiler, raw.source, raw.tokens, script)
            .map_err(de::Error::custom)?;
        if nef.checksum != raw.checksum {
            return Err(de::Error::custom(NefError::ChecksumMismatch {
                stored: raw.checksum,
                computed: nef.checksum,
            }));
        }
        Ok(nef)
    }
}
