// src/noyau/analyse.rs
//
// Analyse syntaxique par descente récursive.
// ------------------------------------------
// Grammaire (précédence croissante, puissance droite-associative) :
//
//   expr      := terme (('+' | '-') terme)*
//   terme     := facteur (('*' | '/') facteur)*
//   facteur   := '-' facteur | puissance
//   puissance := primaire ('^' facteur)?
//   primaire  := NOMBRE | '(' expr ')'
//
// Conventions retenues (et testées) :
// - '^' droite-associatif : 2^3^2 = 2^(3^2) = 512
// - le moins unaire lie moins fort que '^' : -2^2 = -(2^2) = -4
// - l'exposant passe par `facteur`, donc 2^-3 est légal
//
// Jamais supporté : identifiants, appels de fonction, multiplication implicite
// (2(3)), opérateurs de comparaison/logiques, entrées multiples.

use super::erreurs::ErreurParse;
use super::expr::{Expr, OpBin};
use super::jetons::{format_jeton, Jeton};

/// Imbrication maximale acceptée. Garde-fou anti-débordement de pile :
/// au-delà, on refuse proprement au lieu de risquer un crash.
const PROFONDEUR_MAX: usize = 512;

/// Analyse une suite de jetons et produit l'AST, en exigeant que TOUTE
/// l'entrée soit consommée (pas de reste après une expression complète).
pub fn analyser(jetons: &[Jeton]) -> Result<Expr, ErreurParse> {
    if jetons.is_empty() {
        return Err(ErreurParse::EntreeVide);
    }

    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
    };

    let expr = a.expr()?;

    // Reste après une expression complète ? ex: "1 2", "(1+2)3"
    if let Some(j) = a.courant() {
        return Err(ErreurParse::JetonInattendu(format_jeton(j)));
    }

    Ok(expr)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Jeton> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) {
        self.pos += 1;
    }

    fn entrer(&mut self) -> Result<(), ErreurParse> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurParse::ExpressionTropProfonde);
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    /// expr := terme (('+' | '-') terme)*
    fn expr(&mut self) -> Result<Expr, ErreurParse> {
        self.entrer()?;
        let mut gauche = self.terme()?;

        while let Some(j) = self.courant() {
            let op = match j {
                Jeton::Plus => OpBin::Add,
                Jeton::Minus => OpBin::Sub,
                _ => break,
            };
            self.avancer();
            let droite = self.terme()?;
            gauche = Expr::binaire(op, gauche, droite);
        }

        self.sortir();
        Ok(gauche)
    }

    /// terme := facteur (('*' | '/') facteur)*
    fn terme(&mut self) -> Result<Expr, ErreurParse> {
        let mut gauche = self.facteur()?;

        while let Some(j) = self.courant() {
            let op = match j {
                Jeton::Star => OpBin::Mul,
                Jeton::Slash => OpBin::Div,
                _ => break,
            };
            self.avancer();
            let droite = self.facteur()?;
            gauche = Expr::binaire(op, gauche, droite);
        }

        Ok(gauche)
    }

    /// facteur := '-' facteur | puissance
    fn facteur(&mut self) -> Result<Expr, ErreurParse> {
        self.entrer()?;
        let out = if matches!(self.courant(), Some(Jeton::Minus)) {
            self.avancer();
            let operande = self.facteur()?;
            Ok(Expr::neg(operande))
        } else {
            self.puissance()
        };
        self.sortir();
        out
    }

    /// puissance := primaire ('^' facteur)?
    ///
    /// L'exposant repasse par `facteur` : c'est ce qui donne à la fois la
    /// droite-associativité (facteur -> puissance -> ...) et le droit d'écrire
    /// un exposant négatif (2^-3).
    fn puissance(&mut self) -> Result<Expr, ErreurParse> {
        let base = self.primaire()?;

        if matches!(self.courant(), Some(Jeton::Caret)) {
            self.avancer();
            let exposant = self.facteur()?;
            return Ok(Expr::binaire(OpBin::Pow, base, exposant));
        }

        Ok(base)
    }

    /// primaire := NOMBRE | '(' expr ')'
    fn primaire(&mut self) -> Result<Expr, ErreurParse> {
        match self.courant() {
            Some(Jeton::Num(v)) => {
                let v = *v;
                self.avancer();
                Ok(Expr::Nombre(v))
            }

            Some(Jeton::LPar) => {
                self.avancer();
                let interne = self.expr()?;
                match self.courant() {
                    Some(Jeton::RPar) => {
                        self.avancer();
                        Ok(interne)
                    }
                    Some(j) => Err(ErreurParse::JetonInattendu(format_jeton(j))),
                    None => Err(ErreurParse::ParentheseNonFermee),
                }
            }

            Some(j) => Err(ErreurParse::JetonInattendu(format_jeton(j))),

            // Entrée finie au milieu d'une expression : "2+", "(", "3*"
            None => Err(ErreurParse::ExpressionIncomplete),
        }
    }
}
