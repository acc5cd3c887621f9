use derive_more::Display;

pub type Value = i64;

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[display(fmt = "({}, {}, {})", a, b, c)]
pub struct Triplet {
    pub a: Value,
    pub b: Value,
    pub c: Value,
}

impl Triplet {
    pub fn new(a: Value, b: Value, c: Value) -> Self {
        Self { a, b, c }
    }

    pub fn get(&self, field: Field) -> Value {
        match field {
            Field::A => self.a,
            Field::B => self.b,
            Field::C => self.c,
        }
    }
}

impl From<(Value, Value, Value)> for Triplet {
    fn from((a, b, c): (Value, Value, Value)) -> Self {
        Self::new(a, b, c)
    }
}

/// Which of the three fields an ordering is sorted by (and whose quota it spends).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    A,
    B,
    C,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::A, Field::B, Field::C];

    pub fn index(self) -> usize {
        match self {
            Field::A => 0,
            Field::B => 1,
            Field::C => 2,
        }
    }
}

/// Remaining picks per ordering. Zero or negative means exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quotas {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Quotas {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::A => self.x,
            Field::B => self.y,
            Field::C => self.z,
        }
    }

    pub fn available(&self, field: Field) -> bool {
        self.get(field) > 0
    }

    pub fn spend(&mut self, field: Field) {
        let slot = match field {
            Field::A => &mut self.x,
            Field::B => &mut self.y,
            Field::C => &mut self.z,
        };
        *slot -= 1;
    }

    pub fn all_exhausted(&self) -> bool {
        Field::ALL.into_iter().all(|f| !self.available(f))
    }
}
