//! QLI 프로그램 모델과 방문자(visitor) 실행 규약.

/// 벡터 이동 축. Galil의 `A`/`B` 축은 각각 X/Y로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' | 'A' => Some(Self::X),
            'Y' | 'B' => Some(Self::Y),
            _ => None,
        }
    }
}

/// `VP` 인자 중 몇 번째 값이 x/y 좌표가 되는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    pub x: usize,
    pub y: usize,
}

impl Default for AxisMap {
    fn default() -> Self {
        Self { x: 0, y: 1 }
    }
}

impl AxisMap {
    /// `VM` 에 나열된 두 축 순서로부터 인자 매핑을 만든다.
    pub fn from_axes(first: Axis, second: Axis) -> Option<Self> {
        match (first, second) {
            (Axis::X, Axis::Y) => Some(Self { x: 0, y: 1 }),
            (Axis::Y, Axis::X) => Some(Self { x: 1, y: 0 }),
            _ => None,
        }
    }

    pub fn pick(&self, d1: f64, d2: f64) -> (f64, f64) {
        let args = [d1, d2];
        (args[self.x], args[self.y])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `VM` 벡터 모드 축 지정.
    VectorMotion { axes: AxisMap },
    /// `VP` 시퀀스 기준 위치.
    VectorPosition { d1: f64, d2: f64 },
    /// `CR` 원호. 각도는 도(degree) 단위.
    Circle {
        radius: f64,
        start_angle: f64,
        angle_range: f64,
    },
    /// `VE` 벡터 시퀀스 종료.
    VectorSequenceEnd,
    /// `CS` 시퀀스 초기화.
    ClearSequence,
    NeedleOn,
    NeedleOff,
    /// `EN` 프로그램 종료.
    End,
    /// 좌표에 영향이 없는 Galil 명령.
    Other { mnemonic: String, args: Vec<String> },
}

/// 원본 줄 번호가 붙은 명령.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub line: usize,
    pub value: T,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub commands: Vec<Located<Command>>,
}

/// 명령 종류별 처리 훅. 기본 구현은 아무 일도 하지 않는다.
pub trait ProgramVisitor {
    fn vector_motion(&mut self, _index: usize, _axes: AxisMap) {}
    fn vector_position(&mut self, _index: usize, _d1: f64, _d2: f64) {}
    fn circle(&mut self, _index: usize, _radius: f64, _start_angle: f64, _angle_range: f64) {}
    fn vector_sequence_end(&mut self, _index: usize) {}
    fn clear_sequence(&mut self, _index: usize) {}
    fn needle_on(&mut self, _index: usize) {}
    fn needle_off(&mut self, _index: usize) {}
    fn end(&mut self, _index: usize) {}
    fn other(&mut self, _index: usize, _mnemonic: &str, _args: &[String]) {}
}

impl Program {
    pub fn new(commands: Vec<Located<Command>>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// 소스 순서대로 명령을 방문자에 전달한다.
    pub fn execute(&self, visitor: &mut dyn ProgramVisitor) {
        for (index, located) in self.commands.iter().enumerate() {
            match &located.value {
                Command::VectorMotion { axes } => visitor.vector_motion(index, *axes),
                Command::VectorPosition { d1, d2 } => visitor.vector_position(index, *d1, *d2),
                Command::Circle {
                    radius,
                    start_angle,
                    angle_range,
                } => visitor.circle(index, *radius, *start_angle, *angle_range),
                Command::VectorSequenceEnd => visitor.vector_sequence_end(index),
                Command::ClearSequence => visitor.clear_sequence(index),
                Command::NeedleOn => visitor.needle_on(index),
                Command::NeedleOff => visitor.needle_off(index),
                Command::End => visitor.end(index),
                Command::Other { mnemonic, args } => visitor.other(index, mnemonic, args),
            }
        }
    }
}
