//! `JsonDecoder` — recursive-descent JSON reader producing [`RpcValue`]
//! trees.
//!
//! Two departures from a standard JSON parser:
//! - every decoded string value is checked against the date grammars and
//!   becomes a `DateTime` on a match (quoted keys are exempt and stay
//!   text);
//! - object keys may be unquoted: the literals `true`/`false`/`null`,
//!   numbers, or a spliced escaped document for composite keys.

use crate::date;
use crate::error::JohnsonError;
use crate::key;
use crate::number;
use crate::value::RpcValue;

pub struct JsonDecoder {
    data: Vec<u8>,
    x: usize,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            x: 0,
        }
    }

    /// Decode a complete document. Trailing non-whitespace is an error;
    /// the decoder never returns a partially-built value.
    pub fn decode(&mut self, input: &str) -> Result<RpcValue, JohnsonError> {
        self.data = input.as_bytes().to_vec();
        self.x = 0;
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x != self.data.len() {
            return Err(JohnsonError::MalformedJson(self.x));
        }
        Ok(value)
    }

    fn read_any(&mut self) -> Result<RpcValue, JohnsonError> {
        self.skip_whitespace();
        match self.peek()? {
            b'"' => {
                let s = self.read_str()?;
                Ok(reinterpret_str(s))
            }
            b'[' => self.read_arr(),
            b'{' => self.read_obj(),
            b't' => self.read_true(),
            b'f' => self.read_false(),
            b'n' => self.read_null(),
            c if c == b'-' || c.is_ascii_digit() => self.read_num(),
            _ => Err(JohnsonError::MalformedJson(self.x)),
        }
    }

    fn peek(&self) -> Result<u8, JohnsonError> {
        self.data
            .get(self.x)
            .copied()
            .ok_or(JohnsonError::MalformedJson(self.x))
    }

    fn skip_whitespace(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    fn read_null(&mut self) -> Result<RpcValue, JohnsonError> {
        self.expect_literal(b"null")?;
        Ok(RpcValue::Null)
    }

    fn read_true(&mut self) -> Result<RpcValue, JohnsonError> {
        self.expect_literal(b"true")?;
        Ok(RpcValue::Bool(true))
    }

    fn read_false(&mut self) -> Result<RpcValue, JohnsonError> {
        self.expect_literal(b"false")?;
        Ok(RpcValue::Bool(false))
    }

    fn expect_literal(&mut self, lit: &[u8]) -> Result<(), JohnsonError> {
        let end = self.x + lit.len();
        if end > self.data.len() || &self.data[self.x..end] != lit {
            return Err(JohnsonError::MalformedJson(self.x));
        }
        self.x = end;
        Ok(())
    }

    fn read_num(&mut self) -> Result<RpcValue, JohnsonError> {
        let start = self.x;
        let data = &self.data;
        let len = data.len();
        let mut x = self.x;

        if x < len && data[x] == b'-' {
            x += 1;
        }
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x < len && data[x] == b'.' {
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if x < len && (data[x] == b'e' || data[x] == b'E') {
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        self.x = x;

        let token = std::str::from_utf8(&data[start..x])
            .map_err(|_| JohnsonError::MalformedJson(start))?;
        number::parse_number(token).map_err(|_| JohnsonError::MalformedJson(start))
    }

    fn read_str(&mut self) -> Result<String, JohnsonError> {
        if self.peek()? != b'"' {
            return Err(JohnsonError::MalformedJson(self.x));
        }
        let start = self.x + 1;
        let mut i = start;
        while i < self.data.len() {
            match self.data[i] {
                b'\\' => i += 2,
                b'"' => {
                    let s = decode_string_body(&self.data[start..i], start)?;
                    self.x = i + 1;
                    return Ok(s);
                }
                _ => i += 1,
            }
        }
        Err(JohnsonError::MalformedJson(self.x))
    }

    fn read_arr(&mut self) -> Result<RpcValue, JohnsonError> {
        self.x += 1; // opening bracket
        let mut arr = Vec::new();
        let mut first = true;
        loop {
            self.skip_whitespace();
            match self.peek()? {
                b']' => {
                    self.x += 1;
                    return Ok(RpcValue::Array(arr));
                }
                b',' if !first => self.x += 1,
                _ if !first => return Err(JohnsonError::MalformedJson(self.x)),
                _ => {}
            }
            arr.push(self.read_any()?);
            first = false;
        }
    }

    fn read_obj(&mut self) -> Result<RpcValue, JohnsonError> {
        self.x += 1; // opening brace
        let mut map = Vec::new();
        let mut first = true;
        loop {
            self.skip_whitespace();
            match self.peek()? {
                b'}' => {
                    self.x += 1;
                    return Ok(RpcValue::Map(map));
                }
                b',' if !first => self.x += 1,
                _ if !first => return Err(JohnsonError::MalformedJson(self.x)),
                _ => {}
            }
            self.skip_whitespace();
            let key = self.read_key()?;
            self.skip_whitespace();
            if self.peek()? != b':' {
                return Err(JohnsonError::MalformedJson(self.x));
            }
            self.x += 1;
            let val = self.read_any()?;
            map.push((key, val));
            first = false;
        }
    }

    fn read_key(&mut self) -> Result<RpcValue, JohnsonError> {
        if self.peek()? == b'"' {
            // Quoted keys stay textual even when they look like dates, so
            // every decoded key can be re-encoded.
            return Ok(RpcValue::Str(self.read_str()?));
        }
        let at = self.x;
        let token = self.read_key_token()?;
        key::decode_key_token(&token, at)
    }

    /// Scan an unquoted field-name token up to the top-level `:`, tracking
    /// brace/bracket depth. Inner string delimiters appear as `\"` pairs
    /// because the field name carries one level of string escaping.
    fn read_key_token(&mut self) -> Result<String, JohnsonError> {
        let start = self.x;
        let mut depth = 0usize;
        let mut in_str = false;
        let mut i = self.x;
        while i < self.data.len() {
            let ch = self.data[i];
            if in_str {
                if ch == b'\\' {
                    if i + 1 < self.data.len() && self.data[i + 1] == b'"' {
                        in_str = false;
                    }
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }
            match ch {
                b':' if depth == 0 => {
                    if i == start {
                        return Err(JohnsonError::MalformedJson(start));
                    }
                    let token = std::str::from_utf8(&self.data[start..i])
                        .map_err(|_| JohnsonError::MalformedJson(start))?
                        .trim_end()
                        .to_string();
                    self.x = i;
                    return Ok(token);
                }
                b'{' | b'[' => {
                    depth += 1;
                    i += 1;
                }
                b'}' | b']' => {
                    if depth == 0 {
                        return Err(JohnsonError::MalformedJson(i));
                    }
                    depth -= 1;
                    i += 1;
                }
                b'\\' if i + 1 < self.data.len() && self.data[i + 1] == b'"' => {
                    in_str = true;
                    i += 2;
                }
                _ => i += 1,
            }
        }
        Err(JohnsonError::MalformedJson(start))
    }
}

/// A decoded string token that matches a date grammar is always a date,
/// never literal text.
fn reinterpret_str(s: String) -> RpcValue {
    match date::parse_json_rpc_date(&s) {
        Ok(dt) => RpcValue::DateTime(dt),
        Err(_) => RpcValue::Str(s),
    }
}

/// Decode a JSON string body (between the quotes) handling escape
/// sequences; serde_json does the unescaping on the slow path.
fn decode_string_body(bytes: &[u8], at: usize) -> Result<String, JohnsonError> {
    if !bytes.contains(&b'\\') {
        return std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| JohnsonError::MalformedJson(at));
    }
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    serde_json::from_slice(&quoted).map_err(|_| JohnsonError::MalformedJson(at))
}
