// src/noyau/jetons.rs

use super::erreurs::ErreurParse;

/// Unité lexicale. Immuable une fois produite.
/// La fin d'entrée n'a pas de jeton dédié : côté analyse, le curseur qui sort
/// de la tranche (`Option::None`) joue ce rôle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.25, .5, 2.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - espaces ignorés entre les jetons
///
/// Tout le reste (lettres, appels de fonction, `;`, etc.) est rejeté :
/// c'est la première moitié de la frontière de sûreté.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurParse> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : chiffres avec au plus un point décimal.
        // On accepte aussi ".5" et "2." (le pavé permet de commencer par ".").
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;

            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }

            let txt: String = chars[start..i].iter().collect();

            // "." seul n'est pas un nombre
            if !txt.chars().any(|d| d.is_ascii_digit()) {
                return Err(ErreurParse::NombreInvalide(txt));
            }

            let v: f64 = txt
                .parse()
                .map_err(|_| ErreurParse::NombreInvalide(txt.clone()))?;

            out.push(Jeton::Num(v));
            continue;
        }

        return Err(ErreurParse::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (messages d'erreur) : un jeton en texte.
pub fn format_jeton(j: &Jeton) -> String {
    match j {
        Jeton::Num(v) => format!("{v}"),

        Jeton::Plus => "+".to_string(),
        Jeton::Minus => "-".to_string(),
        Jeton::Star => "*".to_string(),
        Jeton::Slash => "/".to_string(),
        Jeton::Caret => "^".to_string(),

        Jeton::LPar => "(".to_string(),
        Jeton::RPar => ")".to_string(),
    }
}
