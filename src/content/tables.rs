//! Static content tables.
//!
//! Pure data: prompt texts tagged by difficulty, trivia questions, and
//! the rule cards that become conditional penalties. The pool in
//! `content::ContentPool` handles sampling; nothing here has behavior.

use crate::cards::Difficulty;

/// A prompt with a difficulty tag.
#[derive(Clone, Copy, Debug)]
pub struct PromptEntry {
    pub difficulty: Difficulty,
    pub text: &'static str,
}

/// A trivia question with four options.
#[derive(Clone, Copy, Debug)]
pub struct TriviaEntry {
    pub difficulty: Difficulty,
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options` of the correct answer.
    pub answer: usize,
}

/// A table rule that stays active for a number of rounds.
#[derive(Clone, Copy, Debug)]
pub struct RuleEntry {
    pub text: &'static str,
    pub rounds: u32,
}

const fn p(difficulty: Difficulty, text: &'static str) -> PromptEntry {
    PromptEntry { difficulty, text }
}

pub const YO_NUNCA: &[PromptEntry] = &[
    p(Difficulty::Suave, "Yo nunca me he quedado dormido en el transporte público"),
    p(Difficulty::Suave, "Yo nunca he cantado en la ducha a todo volumen"),
    p(Difficulty::Suave, "Yo nunca he fingido conocer una canción"),
    p(Difficulty::Medio, "Yo nunca he stalkeado a un ex en redes sociales"),
    p(Difficulty::Medio, "Yo nunca he mentido para salir de una fiesta"),
    p(Difficulty::Medio, "Yo nunca he llorado viendo una película de dibujos"),
    p(Difficulty::Alto, "Yo nunca he mandado un mensaje del que me arrepentí al instante"),
    p(Difficulty::Alto, "Yo nunca he besado a alguien de este grupo"),
    p(Difficulty::Picante, "Yo nunca he tenido una cita a escondidas"),
    p(Difficulty::Picante, "Yo nunca he borrado el historial por vergüenza"),
];

pub const VERDAD_RETO: &[PromptEntry] = &[
    p(Difficulty::Suave, "Verdad: ¿cuál es tu manía más rara?"),
    p(Difficulty::Suave, "Reto: habla con acento extranjero hasta tu próximo turno"),
    p(Difficulty::Medio, "Verdad: ¿a quién de la mesa le pedirías consejo amoroso?"),
    p(Difficulty::Medio, "Reto: deja que el grupo escriba un estado en tu teléfono"),
    p(Difficulty::Alto, "Verdad: ¿cuál es la mentira más grande que has contado este año?"),
    p(Difficulty::Alto, "Reto: imita a alguien de la mesa hasta que adivinen a quién"),
    p(Difficulty::Picante, "Verdad: ¿cuál fue tu peor cita y por qué?"),
    p(Difficulty::Picante, "Reto: muestra la última foto de tu galería"),
];

pub const CHARADAS: &[PromptEntry] = &[
    p(Difficulty::Suave, "Un flamenco dormido"),
    p(Difficulty::Suave, "Tender la ropa con viento"),
    p(Difficulty::Medio, "Un robot bailando salsa"),
    p(Difficulty::Medio, "Perder las llaves dentro del sofá"),
    p(Difficulty::Alto, "Una película de terror en el supermercado"),
    p(Difficulty::Alto, "Un superhéroe con miedo a las alturas"),
    p(Difficulty::Picante, "Tu canción favorita, sin sonidos"),
    p(Difficulty::Picante, "La primera cita de dos pulpos"),
];

pub const QUE_PREFIERES: &[PromptEntry] = &[
    p(Difficulty::Suave, "¿Qué prefieres: no volver a comer pizza o no volver a comer helado?"),
    p(Difficulty::Suave, "¿Qué prefieres: vivir sin música o vivir sin series?"),
    p(Difficulty::Medio, "¿Qué prefieres: saber cuándo o saber cómo?"),
    p(Difficulty::Medio, "¿Qué prefieres: hablar todos los idiomas o hablar con animales?"),
    p(Difficulty::Alto, "¿Qué prefieres: que lean tu chat o que publiquen tus búsquedas?"),
    p(Difficulty::Picante, "¿Qué prefieres: un ex con memoria o un ex con capturas?"),
];

pub const QUIEN_PROBABLE: &[PromptEntry] = &[
    p(Difficulty::Suave, "¿Quién es más probable que llegue tarde a su propia boda?"),
    p(Difficulty::Suave, "¿Quién es más probable que se ría en un funeral?"),
    p(Difficulty::Medio, "¿Quién es más probable que se haga famoso por accidente?"),
    p(Difficulty::Medio, "¿Quién es más probable que olvide un cumpleaños importante?"),
    p(Difficulty::Alto, "¿Quién es más probable que mande un audio de cinco minutos?"),
    p(Difficulty::Picante, "¿Quién es más probable que tenga un admirador secreto aquí?"),
];

pub const ACCION_RAPIDA: &[PromptEntry] = &[
    p(Difficulty::Suave, "¡El último en tocarse la nariz bebe!"),
    p(Difficulty::Suave, "¡El último en levantarse bebe!"),
    p(Difficulty::Medio, "¡El último en decir un color que no sea rojo bebe!"),
    p(Difficulty::Medio, "¡El último en tocar algo de madera bebe!"),
    p(Difficulty::Alto, "¡El último en nombrar una capital bebe doble!"),
    p(Difficulty::Picante, "¡El último en enseñar su fondo de pantalla bebe doble!"),
];

/// Penalty dares drawn when the bomb explodes.
pub const PENALTIES: &[PromptEntry] = &[
    p(Difficulty::Suave, "Bebe un trago y brinda por el grupo"),
    p(Difficulty::Suave, "Bebe un trago con la mano izquierda"),
    p(Difficulty::Medio, "Bebe dos tragos sin usar las manos... es broma, usa una"),
    p(Difficulty::Medio, "Bebe dos tragos y cuenta un chiste malo"),
    p(Difficulty::Alto, "Bebe tres tragos y deja que el grupo elija tu apodo de la noche"),
    p(Difficulty::Alto, "Bebe tres tragos mirando fijamente a quien te pasó la bomba"),
    p(Difficulty::Picante, "Fondo blanco, y el grupo decide tu próximo reto"),
    p(Difficulty::Picante, "Bebe cinco tragos o cumple un reto picante del grupo"),
];

/// Challenges for the bottle and the roulette's challenge segment.
pub const RETOS: &[PromptEntry] = &[
    p(Difficulty::Suave, "Cuenta tu peor chiste con cara seria"),
    p(Difficulty::Suave, "Haz tu mejor paso de baile ahora mismo"),
    p(Difficulty::Medio, "Habla en tercera persona durante dos rondas"),
    p(Difficulty::Medio, "Deja que te peinen como quieran"),
    p(Difficulty::Alto, "Llama a un contacto al azar y di 'lo sé todo'"),
    p(Difficulty::Alto, "Imita a un profesor que todos conozcan"),
    p(Difficulty::Picante, "Confiesa algo que nadie de la mesa sepa"),
    p(Difficulty::Picante, "El grupo revisa tu último emoji enviado y tú lo explicas"),
];

pub const TRIVIA: &[TriviaEntry] = &[
    TriviaEntry {
        difficulty: Difficulty::Suave,
        question: "¿Cuántos continentes hay en la Tierra?",
        options: ["Cinco", "Seis", "Siete", "Ocho"],
        answer: 2,
    },
    TriviaEntry {
        difficulty: Difficulty::Suave,
        question: "¿De qué color es la caja negra de un avión?",
        options: ["Negra", "Naranja", "Roja", "Amarilla"],
        answer: 1,
    },
    TriviaEntry {
        difficulty: Difficulty::Medio,
        question: "¿Qué país tiene más husos horarios?",
        options: ["Rusia", "Estados Unidos", "China", "Francia"],
        answer: 3,
    },
    TriviaEntry {
        difficulty: Difficulty::Medio,
        question: "¿Cuál es el único mamífero capaz de volar?",
        options: ["La ardilla voladora", "El murciélago", "El colibrí", "El lémur"],
        answer: 1,
    },
    TriviaEntry {
        difficulty: Difficulty::Alto,
        question: "¿En qué año llegó el ser humano a la Luna por primera vez?",
        options: ["1965", "1967", "1969", "1971"],
        answer: 2,
    },
    TriviaEntry {
        difficulty: Difficulty::Alto,
        question: "¿Cuál es el río más largo del mundo?",
        options: ["El Nilo", "El Amazonas", "El Yangtsé", "El Misisipi"],
        answer: 1,
    },
    TriviaEntry {
        difficulty: Difficulty::Picante,
        question: "¿Cuántos corazones tiene un pulpo?",
        options: ["Uno", "Dos", "Tres", "Cuatro"],
        answer: 2,
    },
    TriviaEntry {
        difficulty: Difficulty::Picante,
        question: "¿Qué planeta gira en sentido contrario a los demás?",
        options: ["Marte", "Venus", "Urano", "Mercurio"],
        answer: 1,
    },
];

/// Rules dealt by the roulette; active for a fixed number of rounds.
pub const REGLAS: &[RuleEntry] = &[
    RuleEntry {
        text: "Termina cada frase con 'mi capitán' hasta que expire",
        rounds: 3,
    },
    RuleEntry {
        text: "Prohibido decir nombres propios",
        rounds: 3,
    },
    RuleEntry {
        text: "Solo se puede beber con la mano izquierda",
        rounds: 4,
    },
    RuleEntry {
        text: "Prohibido señalar con el dedo",
        rounds: 4,
    },
    RuleEntry {
        text: "Quien diga 'yo' bebe un trago",
        rounds: 5,
    },
];
